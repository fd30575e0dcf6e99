use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::column::Row;
use crate::domain::entities::{Credentials, Language, Session};
use crate::domain::page::PageResult;
use crate::domain::query::ListQuery;

/// Failure taxonomy for the backend API. A response that does not match the
/// expected shape is `Decode`, never an empty page: "no data" and "fetch
/// failed" must stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not signed in")]
    Unauthorized,
}

/// Envelope returned by mutating endpoints. On `success: false` the caller
/// surfaces `message` and leaves rendered lists untouched; a refetch, not a
/// local splice, brings them up to date.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MutationOutcome {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// The backend API as the console sees it. One list contract shared by every
/// resource, plus the handful of non-list calls the console needs.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Fetches one page of `resource` for the given query snapshot.
    async fn fetch_page(&self, resource: &str, query: &ListQuery) -> Result<PageResult<Row>, ApiError>;

    async fn create(&self, resource: &str, body: &Value) -> Result<MutationOutcome, ApiError>;
    async fn update(&self, resource: &str, id: i64, body: &Value) -> Result<MutationOutcome, ApiError>;
    async fn delete(&self, resource: &str, id: i64) -> Result<MutationOutcome, ApiError>;

    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError>;
    async fn request_password_reset(&self, email: &str) -> Result<MutationOutcome, ApiError>;

    /// The full language list for filter dropdowns.
    async fn languages(&self) -> Result<Vec<Language>, ApiError>;

    /// Installs (or clears) the bearer token used on subsequent requests.
    fn set_bearer(&self, token: Option<String>);
}
