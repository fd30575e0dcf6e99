use std::sync::RwLock;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::domain::column::Row;
use crate::domain::entities::{Credentials, Language, Session};
use crate::domain::page::PageResult;
use crate::domain::query::ListQuery;
use crate::usecase::ports::api::{AdminApi, ApiError, MutationOutcome};

/// Error bodies are `{ "message": "..." }` (sometimes with more fields).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Reqwest-backed implementation of [`AdminApi`].
pub struct HttpApi {
    client: Client,
    base_url: Url,
    token: RwLock<Option<String>>,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).with_context(|| format!("invalid API base URL: {base_url}"))?;
        Ok(Self {
            client: Client::new(),
            base_url,
            token: RwLock::new(None),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::Transport(format!("bad endpoint {path}: {err}")))
    }

    /// List URL for a resource and query snapshot, e.g.
    /// `{base}/questions?page=1&limit=10&q=caf%C3%A9&language_id=3`.
    pub(crate) fn list_url(&self, resource: &str, query: &ListQuery) -> Result<Url, ApiError> {
        let mut url = self.endpoint(resource)?;
        url.query_pairs_mut().extend_pairs(query.request_params());
        Ok(url)
    }

    fn bearer(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    async fn send(&self, method: Method, url: Url, body: Option<&Value>) -> Result<String, ApiError> {
        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, "dispatching request");
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if status.is_success() {
            return Ok(text);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or_else(|_| status.to_string());
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn mutate(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<MutationOutcome, ApiError> {
        let text = self.send(method, url, body).await?;
        Self::decode(&text)
    }
}

#[async_trait]
impl AdminApi for HttpApi {
    async fn fetch_page(&self, resource: &str, query: &ListQuery) -> Result<PageResult<Row>, ApiError> {
        let url = self.list_url(resource, query)?;
        let text = self.send(Method::GET, url, None).await?;
        Self::decode(&text)
    }

    async fn create(&self, resource: &str, body: &Value) -> Result<MutationOutcome, ApiError> {
        let url = self.endpoint(resource)?;
        self.mutate(Method::POST, url, Some(body)).await
    }

    async fn update(&self, resource: &str, id: i64, body: &Value) -> Result<MutationOutcome, ApiError> {
        let url = self.endpoint(&format!("{resource}/{id}"))?;
        self.mutate(Method::PATCH, url, Some(body)).await
    }

    async fn delete(&self, resource: &str, id: i64) -> Result<MutationOutcome, ApiError> {
        let url = self.endpoint(&format!("{resource}/{id}"))?;
        self.mutate(Method::DELETE, url, None).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let url = self.endpoint("auth/login")?;
        let body = serde_json::to_value(credentials)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let outcome = self.mutate(Method::POST, url, Some(&body)).await?;
        if !outcome.success {
            return Err(ApiError::Server {
                status: 403,
                message: outcome.message,
            });
        }
        let data = outcome
            .data
            .ok_or_else(|| ApiError::Decode("login response missing data".to_string()))?;
        serde_json::from_value(data).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn request_password_reset(&self, email: &str) -> Result<MutationOutcome, ApiError> {
        let url = self.endpoint("auth/forgot-password")?;
        let body = serde_json::json!({ "email": email });
        self.mutate(Method::POST, url, Some(&body)).await
    }

    async fn languages(&self) -> Result<Vec<Language>, ApiError> {
        let mut query = ListQuery::default();
        query.set_page_size(100);
        let url = self.list_url("languages", &query)?;
        let text = self.send(Method::GET, url, None).await?;
        let page: PageResult<Language> = Self::decode(&text)?;
        Ok(page.data)
    }

    fn set_bearer(&self, token: Option<String>) {
        let mut guard = self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = token;
    }
}
