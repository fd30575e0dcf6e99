use std::sync::Arc;

use dioxus::prelude::{use_signal, Signal};

use crate::domain::column::Row;
use crate::domain::debounce::DebounceGate;
use crate::domain::entities::{Language, Session};
use crate::domain::page::PageResult;
use crate::domain::query::ListQuery;
use crate::domain::url::LinkBar;
use crate::ui::resources::Resource;

pub struct AppState {
    pub session: Signal<Option<Session>>,
    pub login_email: Signal<String>,
    pub login_password: Signal<String>,
    pub login_notice: Signal<String>,

    pub resource: Signal<Resource>,
    pub query: Signal<ListQuery>,
    pub search_input: Signal<String>,
    pub search_gate: Signal<DebounceGate<String>>,
    pub total_pages: Signal<Option<u32>>,
    pub last_page: Signal<Option<PageResult<Row>>>,
    pub last_error: Signal<Option<String>>,
    pub loading: Signal<bool>,
    pub refresh_tick: Signal<u64>,

    pub link_bar: Signal<LinkBar>,
    pub link_input: Signal<String>,
    pub languages: Signal<Arc<Vec<Language>>>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: use_signal(|| None::<Session>),
            login_email: use_signal(String::new),
            login_password: use_signal(String::new),
            login_notice: use_signal(String::new),

            resource: use_signal(|| Resource::Languages),
            query: use_signal(ListQuery::default),
            search_input: use_signal(String::new),
            search_gate: use_signal(DebounceGate::<String>::new),
            total_pages: use_signal(|| None::<u32>),
            last_page: use_signal(|| None::<PageResult<Row>>),
            last_error: use_signal(|| None::<String>),
            loading: use_signal(|| false),
            refresh_tick: use_signal(|| 0_u64),

            link_bar: use_signal(LinkBar::new),
            link_input: use_signal(String::new),
            languages: use_signal(|| Arc::new(Vec::<Language>::new())),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
