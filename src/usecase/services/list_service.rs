use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::domain::column::Row;
use crate::domain::page::PageResult;
use crate::domain::query::ListQuery;
use crate::usecase::ports::api::{AdminApi, ApiError, MutationOutcome};

/// Fetch orchestration for one list view. Normalizes the query before it
/// leaves the process (an out-of-range page is clamped, never sent as-is) and
/// enforces last-request-wins: every fetch takes a sequence ticket, and a
/// settlement whose ticket is no longer newest is discarded, so a slow early
/// response can never overwrite a newer page.
pub struct ListService {
    api: Arc<dyn AdminApi>,
    sequence: AtomicU64,
}

impl ListService {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self {
            api,
            sequence: AtomicU64::new(0),
        }
    }

    /// Fetches one page. `Ok(None)` means the result was superseded by a
    /// later fetch and must be ignored; errors from superseded fetches are
    /// swallowed the same way.
    pub async fn fetch_page(
        &self,
        resource: &str,
        query: &ListQuery,
        known_total_pages: Option<u32>,
    ) -> Result<Option<PageResult<Row>>, ApiError> {
        let mut query = query.clone();
        query.set_page(query.page, known_total_pages);

        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(resource, page = query.page, ticket, "fetching list page");

        let result = self.api.fetch_page(resource, &query).await;
        if self.sequence.load(Ordering::SeqCst) != ticket {
            tracing::debug!(resource, ticket, "discarding superseded fetch");
            return Ok(None);
        }

        match result {
            Ok(page) => Ok(Some(page)),
            Err(err) => {
                tracing::warn!(resource, error = %err, "list fetch failed");
                Err(err)
            }
        }
    }

    pub async fn create(&self, resource: &str, body: &Value) -> Result<MutationOutcome, ApiError> {
        self.api.create(resource, body).await
    }

    pub async fn update(
        &self,
        resource: &str,
        id: i64,
        body: &Value,
    ) -> Result<MutationOutcome, ApiError> {
        self.api.update(resource, id, body).await
    }

    pub async fn delete(&self, resource: &str, id: i64) -> Result<MutationOutcome, ApiError> {
        self.api.delete(resource, id).await
    }
}
