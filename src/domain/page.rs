use serde::{Deserialize, Serialize};

/// Server-computed pagination metadata. Paging controls are driven from these
/// fields only, never recomputed from item counts, so the UI cannot drift
/// from what the server knows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// One fetched page: the wire envelope `{ "data": [...], "pagination": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> PageResult<T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            pagination: PageMeta::default(),
        }
    }

    /// Range label for the toolbar, e.g. "1-10 of 47" or "41-47 of 47".
    pub fn range_label(&self, page: u32, page_size: u32) -> String {
        let total = self.pagination.total;
        if total == 0 {
            return "0 of 0".to_string();
        }
        let start = u64::from(page.saturating_sub(1)) * u64::from(page_size) + 1;
        let end = (start + self.data.len() as u64).saturating_sub(1);
        format!("{start}-{end} of {total}")
    }
}
