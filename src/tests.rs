use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domain::column::{
    display_cell, render_row_number, render_timestamp, ColumnDescriptor, Row,
};
use crate::domain::debounce::DebounceGate;
use crate::domain::entities::{Credentials, Language};
use crate::domain::page::{PageMeta, PageResult};
use crate::domain::query::{ListQuery, SortDirection, DEFAULT_PAGE_SIZE, FILTER_ALL};
use crate::domain::url::{encode_query, parse_query, LinkBar};
use crate::infra::config::{load_config_from, save_config_to, AppConfig};
use crate::infra::export::export_page_csv;
use crate::infra::http::HttpApi;
use crate::usecase::ports::api::{AdminApi, ApiError, MutationOutcome};
use crate::usecase::services::auth_service::AuthService;
use crate::usecase::services::catalog_service::CatalogService;
use crate::usecase::services::list_service::ListService;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("trivia-admin-{prefix}-{nanos}"))
}

/// Backend stand-in with the real list semantics: search, filters, sort, and
/// pagination over seeded rows, recording every query it receives.
struct InMemoryApi {
    rows: Vec<Row>,
    languages: Vec<Language>,
    recorded: Mutex<Vec<ListQuery>>,
    delays: Mutex<VecDeque<Duration>>,
    language_calls: AtomicUsize,
    bearer: Mutex<Option<String>>,
}

impl InMemoryApi {
    fn seeded(count: usize) -> Self {
        let rows = (1..=count as i64)
            .map(|id| {
                json!({
                    "id": id,
                    "name": format!("Topic {id:02}"),
                    "language_id": (id - 1) % 3 + 1,
                    "is_active": id % 2 == 0,
                    "created_at": format!("2026-01-{:02}T10:00:00Z", (id - 1) % 28 + 1),
                })
            })
            .collect();
        Self {
            rows,
            languages: vec![
                Language {
                    id: 1,
                    name: "English".to_string(),
                    code: "en".to_string(),
                },
                Language {
                    id: 2,
                    name: "French".to_string(),
                    code: "fr".to_string(),
                },
                Language {
                    id: 3,
                    name: "Spanish".to_string(),
                    code: "es".to_string(),
                },
            ],
            recorded: Mutex::new(Vec::new()),
            delays: Mutex::new(VecDeque::new()),
            language_calls: AtomicUsize::new(0),
            bearer: Mutex::new(None),
        }
    }

    fn with_delays(self, delays: &[Duration]) -> Self {
        *self.delays.lock().expect("delay lock") = delays.iter().copied().collect();
        self
    }

    fn recorded_queries(&self) -> Vec<ListQuery> {
        self.recorded.lock().expect("record lock").clone()
    }

    fn bearer_token(&self) -> Option<String> {
        self.bearer.lock().expect("bearer lock").clone()
    }

    fn cell_key(row: &Row, key: &str) -> String {
        display_cell(row.get(key).unwrap_or(&Value::Null), row, 0)
    }
}

#[async_trait]
impl AdminApi for InMemoryApi {
    async fn fetch_page(
        &self,
        _resource: &str,
        query: &ListQuery,
    ) -> Result<PageResult<Row>, ApiError> {
        let delay = self.delays.lock().expect("delay lock").pop_front();
        self.recorded.lock().expect("record lock").push(query.clone());
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let needle = query.search.to_lowercase();
        let mut matched: Vec<Row> = self
            .rows
            .iter()
            .filter(|row| {
                needle.is_empty()
                    || Self::cell_key(row, "name").to_lowercase().contains(&needle)
            })
            .filter(|row| {
                query
                    .filters
                    .iter()
                    .all(|(name, value)| Self::cell_key(row, name) == *value)
            })
            .cloned()
            .collect();

        if let Some(key) = &query.sort_key {
            matched.sort_by(|a, b| {
                let ordering = Self::cell_key(a, key).cmp(&Self::cell_key(b, key));
                match query.sort_direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        let total = matched.len() as u64;
        let page_size = query.page_size as usize;
        let total_pages = total.div_ceil(query.page_size as u64) as u32;
        let start = (query.page as usize - 1) * page_size;
        let data: Vec<Row> = matched.into_iter().skip(start).take(page_size).collect();

        Ok(PageResult {
            data,
            pagination: PageMeta {
                total,
                total_pages,
                has_next_page: query.page < total_pages,
                has_previous_page: query.page > 1 && total_pages > 0,
            },
        })
    }

    async fn create(&self, _resource: &str, _body: &Value) -> Result<MutationOutcome, ApiError> {
        Ok(MutationOutcome {
            success: true,
            message: "Created".to_string(),
            data: None,
        })
    }

    async fn update(
        &self,
        _resource: &str,
        _id: i64,
        _body: &Value,
    ) -> Result<MutationOutcome, ApiError> {
        Ok(MutationOutcome {
            success: true,
            message: "Updated".to_string(),
            data: None,
        })
    }

    async fn delete(&self, _resource: &str, id: i64) -> Result<MutationOutcome, ApiError> {
        let exists = self
            .rows
            .iter()
            .any(|row| row.get("id").and_then(Value::as_i64) == Some(id));
        Ok(MutationOutcome {
            success: exists,
            message: if exists {
                "Deleted".to_string()
            } else {
                "Record not found".to_string()
            },
            data: None,
        })
    }

    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<crate::domain::entities::Session, ApiError> {
        if credentials.email == "admin@example.com" && credentials.password == "secret" {
            Ok(crate::domain::entities::Session {
                token: "tok-1".to_string(),
                admin_name: Some("Admin".to_string()),
            })
        } else {
            Err(ApiError::Server {
                status: 403,
                message: "Invalid credentials".to_string(),
            })
        }
    }

    async fn request_password_reset(&self, _email: &str) -> Result<MutationOutcome, ApiError> {
        Ok(MutationOutcome {
            success: true,
            message: "Reset link sent".to_string(),
            data: None,
        })
    }

    async fn languages(&self) -> Result<Vec<Language>, ApiError> {
        self.language_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.languages.clone())
    }

    fn set_bearer(&self, token: Option<String>) {
        *self.bearer.lock().expect("bearer lock") = token;
    }
}

// --- query state ---

#[test]
fn list_query_defaults_to_first_page() {
    let query = ListQuery::default();

    assert_eq!(query.page, 1);
    assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    assert!(query.search.is_empty());
    assert!(query.sort_key.is_none());
    assert_eq!(query.sort_direction, SortDirection::Asc);
    assert!(query.filters.is_empty());
}

#[test]
fn set_page_clamps_to_known_bounds() {
    let mut query = ListQuery::default();

    query.set_page(0, Some(5));
    assert_eq!(query.page, 1, "page zero should floor at 1");

    query.set_page(99, Some(5));
    assert_eq!(query.page, 5, "page beyond the last should clamp to it");

    query.set_page(99, None);
    assert_eq!(query.page, 99, "without a known total only the floor applies");
}

#[test]
fn set_page_size_resets_page_and_rejects_unknown_sizes() {
    let mut query = ListQuery::default();
    query.set_page(4, None);

    query.set_page_size(50);
    assert_eq!(query.page_size, 50);
    assert_eq!(query.page, 1, "size change should return to the first page");

    query.set_page(3, None);
    query.set_page_size(33);
    assert_eq!(query.page_size, 50, "sizes outside the allowed set are ignored");
    assert_eq!(query.page, 3);
}

#[test]
fn set_search_returns_to_first_page() {
    let mut query = ListQuery::default();
    query.set_page(7, None);

    query.set_search("café");

    assert_eq!(query.search, "café");
    assert_eq!(query.page, 1);
}

#[test]
fn sentinel_filter_value_clears_the_filter() {
    let mut query = ListQuery::default();

    query.set_filter("language_id", "3");
    assert_eq!(query.filter("language_id"), Some("3"));

    query.set_filter("language_id", FILTER_ALL);
    assert_eq!(query.filter("language_id"), None);

    query.set_filter("language_id", "");
    assert_eq!(query.filter("language_id"), None);
}

#[test]
fn toggle_sort_direction_round_trips_and_sort_key_keeps_direction() {
    let mut query = ListQuery::default();

    query.toggle_sort_direction();
    assert_eq!(query.sort_direction, SortDirection::Desc);

    query.set_sort(Some("name".to_string()));
    assert_eq!(
        query.sort_direction,
        SortDirection::Desc,
        "changing the sort key should not reset the direction"
    );

    query.toggle_sort_direction();
    assert_eq!(query.sort_direction, SortDirection::Asc);
}

#[test]
fn request_params_include_only_active_clauses() {
    let query = ListQuery::default();
    let params = query.request_params();
    assert_eq!(
        params,
        vec![
            ("page".to_string(), "1".to_string()),
            ("limit".to_string(), "10".to_string()),
        ],
        "defaults should carry no q/sort/order/filter params"
    );

    let mut query = ListQuery::default();
    query.set_search("café");
    query.set_sort(Some("name".to_string()));
    query.toggle_sort_direction();
    query.set_filter("language_id", "3");
    let params = query.request_params();

    assert!(params.contains(&("q".to_string(), "café".to_string())));
    assert!(params.contains(&("sort".to_string(), "name".to_string())));
    assert!(params.contains(&("order".to_string(), "desc".to_string())));
    assert!(params.contains(&("language_id".to_string(), "3".to_string())));
}

#[test]
fn link_params_round_trip_through_query_string() {
    let params = parse_query("search=foo&language_id=3");

    let mut query = ListQuery::default();
    query.hydrate(&params, &["language_id"]);

    assert_eq!(query.search, "foo");
    assert_eq!(query.filter("language_id"), Some("3"));

    let encoded = encode_query(&query.link_params());
    assert_eq!(
        parse_query(&encoded),
        params,
        "serializing back should reproduce the same parameter set"
    );
}

#[test]
fn hydrate_reads_sort_and_ignores_foreign_filters() {
    let params = parse_query("sort=name&order=desc&topic_id=9");

    let mut query = ListQuery::default();
    query.hydrate(&params, &["language_id"]);

    assert_eq!(query.sort_key.as_deref(), Some("name"));
    assert_eq!(query.sort_direction, SortDirection::Desc);
    assert!(
        query.filters.is_empty(),
        "filters the resource does not understand should be dropped"
    );
}

// --- url codec and link bar ---

#[test]
fn encoded_search_text_is_percent_encoded() {
    let mut bar = LinkBar::new();

    bar.apply("search", Some("café"));

    assert_eq!(bar.current(), "search=caf%C3%A9");
    assert_eq!(bar.read("search").as_deref(), Some("café"));
}

#[test]
fn link_bar_apply_is_idempotent() {
    let mut bar = LinkBar::new();

    bar.apply("search", Some("abc"));
    bar.apply("search", Some("abc"));

    assert_eq!(bar.current(), "search=abc");
    assert_eq!(bar.history_len(), 1, "replace must not grow history");
}

#[test]
fn link_bar_apply_removes_empty_values() {
    let mut bar = LinkBar::new();

    bar.apply("search", Some("abc"));
    bar.apply("search", None);
    assert_eq!(bar.current(), "");

    bar.apply("search", Some("abc"));
    bar.apply("search", Some(""));
    assert_eq!(bar.current(), "", "empty string means remove");
}

#[test]
fn link_bar_preserves_sibling_params() {
    let mut bar = LinkBar::new();

    bar.apply("search", Some("foo"));
    bar.apply("language_id", Some("3"));
    bar.apply("sort", Some("name"));
    bar.apply("search", Some("bar"));

    let params = parse_query(bar.current());
    assert_eq!(params.get("search").map(String::as_str), Some("bar"));
    assert_eq!(params.get("language_id").map(String::as_str), Some("3"));
    assert_eq!(params.get("sort").map(String::as_str), Some("name"));
}

#[test]
fn link_bar_navigate_and_back() {
    let mut bar = LinkBar::new();
    bar.apply("search", Some("foo"));

    bar.navigate("view=questions&language_id=2");
    assert_eq!(bar.history_len(), 2);
    assert_eq!(bar.read("language_id").as_deref(), Some("2"));

    assert!(bar.back());
    assert_eq!(bar.read("search").as_deref(), Some("foo"));
    assert!(!bar.back(), "history start should refuse to go further back");
}

// --- debounce ---

#[test]
fn debounce_burst_delivers_last_value_once() {
    let mut gate = DebounceGate::new();

    let first = gate.schedule("c");
    let second = gate.schedule("ca");
    let last = gate.schedule("café");

    assert_eq!(gate.settle(first), None, "superseded ticket gets nothing");
    assert_eq!(gate.settle(second), None);
    assert_eq!(gate.settle(last), Some("café"));
    assert_eq!(gate.settle(last), None, "delivery happens at most once");
}

#[test]
fn debounce_cancel_blocks_delivery() {
    let mut gate = DebounceGate::new();

    let ticket = gate.schedule("pending".to_string());
    gate.cancel();

    assert_eq!(gate.settle(ticket), None);
    assert!(gate.is_idle());
}

// --- wire envelopes ---

#[test]
fn page_result_decodes_wire_envelope() {
    let body = r#"{
        "data": [{"id": 1, "name": "English"}],
        "pagination": {"total": 47, "totalPages": 5, "hasNextPage": true, "hasPreviousPage": false}
    }"#;

    let page: PageResult<Row> = serde_json::from_str(body).expect("envelope should decode");

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pagination.total, 47);
    assert_eq!(page.pagination.total_pages, 5);
    assert!(page.pagination.has_next_page);
    assert!(!page.pagination.has_previous_page);
}

#[test]
fn malformed_page_envelope_is_rejected() {
    let body = r#"{"rows": [], "count": 0}"#;

    let result: Result<PageResult<Row>, _> = serde_json::from_str(body);

    assert!(
        result.is_err(),
        "a shape mismatch must be an error, not an empty page"
    );
}

#[test]
fn mutation_outcome_decodes_failure_payload() {
    let body = r#"{"success": false, "message": "Topic still has questions"}"#;

    let outcome: MutationOutcome = serde_json::from_str(body).expect("outcome should decode");

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Topic still has questions");
    assert!(outcome.data.is_none());
}

#[test]
fn range_label_reflects_server_totals() {
    let full = PageResult {
        data: vec![json!({}); 10],
        pagination: PageMeta {
            total: 47,
            total_pages: 5,
            has_next_page: true,
            has_previous_page: false,
        },
    };
    assert_eq!(full.range_label(1, 10), "1-10 of 47");

    let partial = PageResult {
        data: vec![json!({}); 7],
        pagination: PageMeta {
            total: 47,
            total_pages: 5,
            has_next_page: false,
            has_previous_page: true,
        },
    };
    assert_eq!(partial.range_label(5, 10), "41-47 of 47");

    let empty: PageResult<Row> = PageResult::empty();
    assert_eq!(empty.range_label(1, 10), "0 of 0");
}

// --- columns ---

#[test]
fn column_descriptor_renders_cells() {
    let row = json!({
        "name": "English",
        "level": 3,
        "is_active": true,
        "missing_me": null,
        "created_at": "2026-01-05T10:30:00Z",
    });

    assert_eq!(ColumnDescriptor::new("Name", "name").cell_text(&row, 0), "English");
    assert_eq!(ColumnDescriptor::new("Level", "level").cell_text(&row, 0), "3");
    assert_eq!(ColumnDescriptor::new("Active", "is_active").cell_text(&row, 0), "yes");
    assert_eq!(ColumnDescriptor::new("Null", "missing_me").cell_text(&row, 0), "");
    assert_eq!(ColumnDescriptor::new("Gone", "no_such_key").cell_text(&row, 0), "");

    let number = ColumnDescriptor::new("#", "id").with_render(render_row_number);
    assert_eq!(number.cell_text(&row, 40), "41", "row numbers are absolute and 1-based");

    let created = ColumnDescriptor::new("Created", "created_at").with_render(render_timestamp);
    assert_eq!(created.cell_text(&row, 0), "2026-01-05 10:30");
}

// --- config and export ---

#[test]
fn config_defaults_when_missing_and_round_trips() {
    let temp_dir = unique_test_dir("config");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let path = temp_dir.join("config.json");

    assert_eq!(load_config_from(&path), AppConfig::default());

    let config = AppConfig {
        api_base_url: "https://api.triviagame.example/v1/".to_string(),
    };
    save_config_to(&path, &config).expect("config should save");
    assert_eq!(load_config_from(&path), config);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn export_page_csv_writes_header_and_rows() {
    let temp_dir = unique_test_dir("export");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let path = temp_dir.join("page.csv");

    let columns = vec![
        ColumnDescriptor::new("#", "id").with_render(render_row_number),
        ColumnDescriptor::new("Name", "name"),
    ];
    let rows = vec![
        json!({"id": 11, "name": "Alpha"}),
        json!({"id": 12, "name": "Beta"}),
    ];

    let written = export_page_csv(&path, &columns, &rows, 10).expect("export should succeed");
    assert_eq!(written, 2);

    let text = fs::read_to_string(&path).expect("csv should be readable");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["#,Name", "11,Alpha", "12,Beta"]);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

// --- http request building ---

#[test]
fn list_url_carries_query_params_percent_encoded() {
    let api = HttpApi::new("http://localhost:4000/api/v1").expect("base url should parse");

    let mut query = ListQuery::default();
    query.set_search("café");
    query.set_filter("language_id", "3");
    let url = api.list_url("questions", &query).expect("url should build");

    assert_eq!(
        url.as_str(),
        "http://localhost:4000/api/v1/questions?page=1&limit=10&q=caf%C3%A9&language_id=3"
    );
}

// --- fetch orchestration ---

#[tokio::test]
async fn fetch_page_never_exceeds_page_size() {
    let api = Arc::new(InMemoryApi::seeded(47));
    let service = ListService::new(api.clone());

    for page in 1..=5 {
        let mut query = ListQuery::default();
        query.set_page(page, Some(5));
        let result = service
            .fetch_page("topics", &query, Some(5))
            .await
            .expect("fetch should succeed")
            .expect("fetch should not be superseded");
        assert!(
            result.data.len() <= query.page_size as usize,
            "page {page} returned more items than the page size"
        );
    }
}

#[tokio::test]
async fn initial_load_uses_defaults_and_reports_meta() {
    let api = Arc::new(InMemoryApi::seeded(47));
    let service = ListService::new(api.clone());

    let page = service
        .fetch_page("topics", &ListQuery::default(), None)
        .await
        .expect("fetch should succeed")
        .expect("fetch should not be superseded");

    let sent = api.recorded_queries().pop().expect("query should be recorded");
    assert_eq!(sent.page, 1);
    assert_eq!(sent.page_size, 10);
    assert!(sent.search.is_empty(), "no q param on initial load");
    assert!(sent.sort_key.is_none(), "no sort/order params on initial load");
    assert!(sent.filters.is_empty(), "no filter params on initial load");

    assert_eq!(page.pagination.total, 47);
    assert_eq!(page.pagination.total_pages, 5);
    assert!(page.pagination.has_next_page);
    assert!(!page.pagination.has_previous_page);
    assert_eq!(page.range_label(1, 10), "1-10 of 47");
}

#[tokio::test]
async fn search_narrows_results() {
    let api = Arc::new(InMemoryApi::seeded(47));
    let service = ListService::new(api.clone());

    let mut query = ListQuery::default();
    query.set_search("topic 07");
    let page = service
        .fetch_page("topics", &query, None)
        .await
        .expect("fetch should succeed")
        .expect("fetch should not be superseded");

    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.data[0]["name"], "Topic 07");
}

#[tokio::test]
async fn language_filter_narrows_results() {
    let api = Arc::new(InMemoryApi::seeded(47));
    let service = ListService::new(api.clone());

    let mut query = ListQuery::default();
    query.set_filter("language_id", "2");
    let page = service
        .fetch_page("topics", &query, None)
        .await
        .expect("fetch should succeed")
        .expect("fetch should not be superseded");

    assert_eq!(page.pagination.total, 16);
    assert!(page
        .data
        .iter()
        .all(|row| row["language_id"] == json!(2)));
}

#[tokio::test]
async fn out_of_range_page_is_clamped_before_dispatch() {
    let api = Arc::new(InMemoryApi::seeded(47));
    let service = ListService::new(api.clone());

    let mut query = ListQuery::default();
    query.set_page(99, None);
    service
        .fetch_page("topics", &query, Some(5))
        .await
        .expect("fetch should succeed");

    let sent = api.recorded_queries().pop().expect("query should be recorded");
    assert_eq!(sent.page, 5, "the request must carry the clamped page");
}

#[tokio::test]
async fn sort_toggle_issues_two_fetches_with_each_order() {
    let api = Arc::new(InMemoryApi::seeded(47));
    let service = ListService::new(api.clone());

    let mut query = ListQuery::default();
    query.set_sort(Some("name".to_string()));
    let ascending = service
        .fetch_page("topics", &query, None)
        .await
        .expect("fetch should succeed")
        .expect("fetch should not be superseded");
    assert_eq!(ascending.data[0]["name"], "Topic 01");

    query.toggle_sort_direction();
    let descending = service
        .fetch_page("topics", &query, None)
        .await
        .expect("fetch should succeed")
        .expect("fetch should not be superseded");
    assert_eq!(descending.data[0]["name"], "Topic 47");

    let orders: Vec<SortDirection> = api
        .recorded_queries()
        .into_iter()
        .map(|q| q.sort_direction)
        .collect();
    assert_eq!(orders, vec![SortDirection::Asc, SortDirection::Desc]);
}

#[tokio::test(start_paused = true)]
async fn slow_earlier_fetch_loses_to_newer_one() {
    let api = Arc::new(
        InMemoryApi::seeded(47)
            .with_delays(&[Duration::from_millis(100), Duration::from_millis(10)]),
    );
    let service = ListService::new(api.clone());

    let mut second_query = ListQuery::default();
    second_query.set_filter("language_id", "2");

    let first_query = ListQuery::default();
    let (first, second) = tokio::join!(
        service.fetch_page("topics", &first_query, None),
        service.fetch_page("topics", &second_query, None),
    );

    assert_eq!(
        first.expect("first fetch should not error"),
        None,
        "the superseded response must be discarded"
    );
    let winner = second
        .expect("second fetch should not error")
        .expect("the newest fetch must win");
    assert_eq!(winner.pagination.total, 16);
}

// --- catalog, auth, mutations ---

#[tokio::test]
async fn language_catalog_is_fetched_once() {
    let api = Arc::new(InMemoryApi::seeded(3));
    let catalog = CatalogService::new(api.clone());

    let first = catalog.languages().await.expect("catalog should load");
    let second = catalog.languages().await.expect("catalog should load");

    assert_eq!(first.len(), 3);
    assert!(Arc::ptr_eq(&first, &second), "both reads should share one snapshot");
    assert_eq!(api.language_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn login_installs_bearer_token_and_logout_clears_it() {
    let api = Arc::new(InMemoryApi::seeded(1));
    let auth = AuthService::new(api.clone());

    let session = auth
        .login(&Credentials {
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .expect("login should succeed");

    assert_eq!(session.token, "tok-1");
    assert_eq!(api.bearer_token().as_deref(), Some("tok-1"));

    auth.logout();
    assert_eq!(api.bearer_token(), None);
}

#[tokio::test]
async fn failed_login_surfaces_server_message() {
    let api = Arc::new(InMemoryApi::seeded(1));
    let auth = AuthService::new(api.clone());

    let err = auth
        .login(&Credentials {
            email: "admin@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .expect_err("bad credentials should fail");

    assert!(err.to_string().contains("Invalid credentials"), "unexpected error: {err}");
    assert_eq!(api.bearer_token(), None, "no token should be installed on failure");
}

#[tokio::test]
async fn delete_reports_server_outcome() {
    let api = Arc::new(InMemoryApi::seeded(5));
    let service = ListService::new(api.clone());

    let hit = service.delete("topics", 3).await.expect("call should succeed");
    assert!(hit.success);

    let miss = service.delete("topics", 99).await.expect("call should succeed");
    assert!(!miss.success);
    assert_eq!(miss.message, "Record not found");
}
