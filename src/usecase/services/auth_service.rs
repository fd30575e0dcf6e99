use std::sync::Arc;

use crate::domain::entities::{Credentials, Session};
use crate::usecase::ports::api::{AdminApi, ApiError, MutationOutcome};

pub struct AuthService {
    api: Arc<dyn AdminApi>,
}

impl AuthService {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self { api }
    }

    /// Signs in and installs the session token for subsequent requests.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let session = self.api.login(credentials).await?;
        self.api.set_bearer(Some(session.token.clone()));
        Ok(session)
    }

    pub fn logout(&self) {
        self.api.set_bearer(None);
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<MutationOutcome, ApiError> {
        self.api.request_password_reset(email).await
    }
}
