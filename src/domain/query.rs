use std::collections::BTreeMap;

/// Page sizes the backend accepts for `limit`.
pub const PAGE_SIZES: [u32; 4] = [10, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Dropdown sentinel meaning "no filter selected".
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// One list view's worth of query state: page, page size, committed search
/// text, sort, and named filter values. Mutators keep the invariants (page is
/// always positive, filters never hold the sentinel) so a snapshot can be
/// turned into request params without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub sort_key: Option<String>,
    pub sort_direction: SortDirection,
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Asc,
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    /// Moves to `page`, clamped into `1..=total_pages` when the server has
    /// told us how many pages exist. An out-of-range page is never kept.
    pub fn set_page(&mut self, page: u32, total_pages: Option<u32>) {
        let mut next = page.max(1);
        if let Some(total) = total_pages {
            if total > 0 {
                next = next.min(total);
            }
        }
        self.page = next;
    }

    /// Switches the page size and returns to the first page, since the old
    /// page number is meaningless against a different page grid. Sizes
    /// outside [`PAGE_SIZES`] are ignored.
    pub fn set_page_size(&mut self, size: u32) {
        if !PAGE_SIZES.contains(&size) {
            return;
        }
        self.page_size = size;
        self.page = 1;
    }

    /// Commits search text (the debounce boundary sits upstream of this call)
    /// and returns to the first page.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    /// Changes the sort key. The direction is deliberately kept as-is; only
    /// [`ListQuery::toggle_sort_direction`] flips it.
    pub fn set_sort(&mut self, key: Option<String>) {
        self.sort_key = key.filter(|k| !k.is_empty());
        self.page = 1;
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort_direction = self.sort_direction.toggled();
        self.page = 1;
    }

    /// Sets a named filter. The sentinel value [`FILTER_ALL`] and the empty
    /// string both mean "no filter" and remove the entry instead.
    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if value.is_empty() || value == FILTER_ALL {
            self.filters.remove(&name);
        } else {
            self.filters.insert(name, value);
        }
        self.page = 1;
    }

    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    /// Query parameters for the list endpoint: `page` and `limit` always,
    /// `q`/`sort`/`order` and filter keys only when set.
    pub fn request_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.page_size.to_string()),
        ];
        if !self.search.is_empty() {
            params.push(("q".to_string(), self.search.clone()));
        }
        if let Some(key) = &self.sort_key {
            params.push(("sort".to_string(), key.clone()));
            params.push(("order".to_string(), self.sort_direction.as_str().to_string()));
        }
        for (name, value) in &self.filters {
            params.push((name.clone(), value.clone()));
        }
        params
    }

    /// The subset of state persisted into the link bar: `search`, `sort`,
    /// `order`, and filter keys. Page and page size are session-local.
    pub fn link_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if !self.search.is_empty() {
            params.insert("search".to_string(), self.search.clone());
        }
        if let Some(key) = &self.sort_key {
            params.insert("sort".to_string(), key.clone());
            params.insert("order".to_string(), self.sort_direction.as_str().to_string());
        }
        for (name, value) in &self.filters {
            params.insert(name.clone(), value.clone());
        }
        params
    }

    /// Rebuilds query state from link parameters, taking only the filter keys
    /// the current resource understands. Runs before the first fetch so a
    /// pasted link reproduces the same view.
    pub fn hydrate(&mut self, params: &BTreeMap<String, String>, filter_keys: &[&str]) {
        if let Some(search) = params.get("search") {
            self.search = search.clone();
        }
        if let Some(sort) = params.get("sort") {
            self.sort_key = Some(sort.clone()).filter(|k| !k.is_empty());
        }
        if let Some(order) = params.get("order").and_then(|o| SortDirection::parse(o)) {
            self.sort_direction = order;
        }
        for key in filter_keys {
            if let Some(value) = params.get(*key) {
                if !value.is_empty() && value != FILTER_ALL {
                    self.filters.insert((*key).to_string(), value.clone());
                }
            }
        }
        self.page = 1;
    }
}
