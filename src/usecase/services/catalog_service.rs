use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::domain::entities::Language;
use crate::usecase::ports::api::{AdminApi, ApiError};

/// Read-only language catalog shared by every filter dropdown. Fetched at
/// most once per process on success and handed out as a shared snapshot; a
/// failed fetch is retried on the next call.
pub struct CatalogService {
    api: Arc<dyn AdminApi>,
    languages: OnceCell<Arc<Vec<Language>>>,
}

impl CatalogService {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self {
            api,
            languages: OnceCell::new(),
        }
    }

    pub async fn languages(&self) -> Result<Arc<Vec<Language>>, ApiError> {
        self.languages
            .get_or_try_init(|| async {
                let fetched = self.api.languages().await?;
                tracing::debug!(count = fetched.len(), "language catalog loaded");
                Ok(Arc::new(fetched))
            })
            .await
            .map(Arc::clone)
    }
}
