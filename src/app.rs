use std::sync::Arc;

use dioxus::core::Task;
use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::domain::debounce::DEBOUNCE_DELAY;
use crate::domain::entities::Credentials;
use crate::domain::query::{ListQuery, FILTER_ALL};
use crate::domain::url::parse_query;
use crate::infra::config::load_config;
use crate::infra::export::export_page_csv;
use crate::infra::http::HttpApi;
use crate::ui::resources::Resource;
use crate::ui::state::app_state::AppState;
use crate::ui::table::DataTable;
use crate::usecase::ports::api::AdminApi;
use crate::usecase::services::auth_service::AuthService;
use crate::usecase::services::catalog_service::CatalogService;
use crate::usecase::services::list_service::ListService;

#[component]
pub fn App() -> Element {
    let services = use_hook(|| {
        let config = load_config();
        HttpApi::new(&config.api_base_url)
            .map(|http| {
                let api: Arc<dyn AdminApi> = Arc::new(http);
                (
                    Arc::new(ListService::new(api.clone())),
                    Arc::new(CatalogService::new(api.clone())),
                    Arc::new(AuthService::new(api)),
                )
            })
            .map_err(|err| err.to_string())
    });
    let (list_service, catalog_service, auth_service) = match services {
        Ok(services) => services,
        Err(err) => {
            return rsx! {
                div {
                    p { "Cannot start console: {err}" }
                }
            };
        }
    };

    let AppState {
        mut session,
        mut login_email,
        mut login_password,
        mut login_notice,
        mut resource,
        mut query,
        mut search_input,
        mut search_gate,
        mut total_pages,
        mut last_page,
        mut last_error,
        mut loading,
        mut refresh_tick,
        mut link_bar,
        mut link_input,
        mut languages,
        mut status,
    } = AppState::new();

    let mut debounce_task = use_signal(|| None::<Task>);

    // Pending debounce deliveries die with the view.
    use_drop(move || {
        search_gate.write().cancel();
        if let Some(task) = *debounce_task.peek() {
            task.cancel();
        }
    });

    // Language catalog for the filter dropdowns; the service fetches at most
    // once per process.
    let catalog_for_languages = catalog_service.clone();
    use_effect(move || {
        if session().is_none() {
            return;
        }
        let catalog = catalog_for_languages.clone();
        spawn(async move {
            match catalog.languages().await {
                Ok(list) => languages.set(list),
                Err(err) => *status.write() = format!("Failed to load languages: {err}"),
            }
        });
    });

    // The fetch chain: whenever the committed query, the resource, or the
    // refresh tick changes, one request goes out. The sequence ticket inside
    // ListService discards anything a later change already superseded, and a
    // failed fetch keeps the previous page on screen with the error in the
    // status line.
    let list_for_fetch = list_service.clone();
    use_effect(move || {
        if session().is_none() {
            return;
        }
        let current_resource = resource();
        let current_query = query();
        let _invalidated = refresh_tick();
        let known_total = *total_pages.peek();
        let service = list_for_fetch.clone();

        loading.set(true);
        spawn(async move {
            match service
                .fetch_page(current_resource.path(), &current_query, known_total)
                .await
            {
                Ok(Some(page)) => {
                    total_pages.set(Some(page.pagination.total_pages));
                    *status.write() = format!(
                        "{}: {} rows",
                        current_resource.label(),
                        page.pagination.total
                    );
                    last_page.set(Some(page));
                    last_error.set(None);
                    loading.set(false);
                }
                Ok(None) => {
                    // Superseded; the newer fetch owns loading and status.
                }
                Err(err) => {
                    last_error.set(Some(err.to_string()));
                    *status.write() = format!("Load failed: {err}");
                    loading.set(false);
                }
            }
        });
    });

    // Keep the editable link box mirroring the link bar.
    use_effect(move || {
        let current = link_bar.read().current().to_string();
        link_input.set(current);
    });

    // Rebuilds view state from the current link-bar entry (after Go or Back).
    let mut restore_from_link = move || {
        let params = parse_query(link_bar.peek().current());
        let next = params
            .get("view")
            .and_then(|view| Resource::from_path(view))
            .unwrap_or(*resource.peek());
        let mut next_query = ListQuery::default();
        next_query.hydrate(&params, next.filter_keys());
        search_input.set(next_query.search.clone());
        search_gate.write().cancel();
        resource.set(next);
        total_pages.set(None);
        last_page.set(None);
        last_error.set(None);
        query.set(next_query);
    };

    let auth_for_login = auth_service.clone();
    let auth_for_reset = auth_service.clone();
    let auth_for_logout = auth_service.clone();
    let list_for_delete = list_service.clone();

    let current_resource = resource();
    let current_query = query();
    let current_page = current_query.page;
    let current_page_size = current_query.page_size;
    let language_filter = current_query
        .filter("language_id")
        .map(str::to_string)
        .unwrap_or_else(|| FILTER_ALL.to_string());
    let sort_value = current_query.sort_key.clone().unwrap_or_default();
    let sort_dir_label = current_query.sort_direction.as_str().to_string();
    let has_language_filter = current_resource.filter_keys().contains(&"language_id");
    let language_options = languages();

    if session().is_none() {
        return rsx! {
            div {
                style: "max-width: 340px; margin: 80px auto; display: flex; flex-direction: column; gap: 10px;",
                h2 { "Trivia Admin" }
                input {
                    placeholder: "Email",
                    value: login_email(),
                    oninput: move |event| login_email.set(event.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: login_password(),
                    oninput: move |event| login_password.set(event.value()),
                }
                button {
                    onclick: move |_| {
                        let auth = auth_for_login.clone();
                        let credentials = Credentials {
                            email: login_email.peek().clone(),
                            password: login_password.peek().clone(),
                        };
                        spawn(async move {
                            match auth.login(&credentials).await {
                                Ok(signed_in) => {
                                    login_notice.set(String::new());
                                    login_password.set(String::new());
                                    session.set(Some(signed_in));
                                }
                                Err(err) => login_notice.set(format!("Sign-in failed: {err}")),
                            }
                        });
                    },
                    "Sign in"
                }
                button {
                    onclick: move |_| {
                        let auth = auth_for_reset.clone();
                        let email = login_email.peek().clone();
                        if email.is_empty() {
                            login_notice.set("Enter your email first".to_string());
                            return;
                        }
                        spawn(async move {
                            match auth.request_password_reset(&email).await {
                                Ok(outcome) => login_notice.set(outcome.message),
                                Err(err) => login_notice.set(format!("Reset failed: {err}")),
                            }
                        });
                    },
                    "Forgot password"
                }
                if !login_notice().is_empty() {
                    p { style: "color: #a33;", "{login_notice}" }
                }
            }
        };
    }

    rsx! {
        div {
            style: "padding: 10px; font-family: sans-serif;",
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                label { "View " }
                select {
                    disabled: loading(),
                    value: "{current_resource.path()}",
                    onchange: move |event| {
                        let Some(next) = Resource::from_path(&event.value()) else {
                            return;
                        };
                        resource.set(next);
                        search_input.set(String::new());
                        search_gate.write().cancel();
                        total_pages.set(None);
                        last_page.set(None);
                        last_error.set(None);
                        let next_query = ListQuery::default();
                        let mut params = next_query.link_params();
                        params.insert("view".to_string(), next.path().to_string());
                        link_bar.write().replace(&params);
                        query.set(next_query);
                    },
                    for entry in Resource::ALL {
                        option { value: "{entry.path()}", "{entry.label()}" }
                    }
                }

                label { "Search " }
                input {
                    placeholder: "Type to search",
                    value: search_input(),
                    oninput: move |event| {
                        let text = event.value();
                        search_input.set(text.clone());
                        let ticket = search_gate.write().schedule(text);
                        if let Some(task) = debounce_task.take() {
                            task.cancel();
                        }
                        let task = spawn(async move {
                            tokio::time::sleep(DEBOUNCE_DELAY).await;
                            if let Some(committed) = search_gate.write().settle(ticket) {
                                let value = (!committed.is_empty()).then_some(committed.clone());
                                query.write().set_search(committed);
                                link_bar.write().apply("search", value.as_deref());
                            }
                        });
                        debounce_task.set(Some(task));
                    },
                }

                if has_language_filter {
                    label { "Language " }
                    select {
                        disabled: loading(),
                        value: "{language_filter}",
                        onchange: move |event| {
                            let value = event.value();
                            query.write().set_filter("language_id", value.clone());
                            let applied = (value != FILTER_ALL).then_some(value);
                            link_bar.write().apply("language_id", applied.as_deref());
                        },
                        option { value: "{FILTER_ALL}", "All languages" }
                        for language in language_options.iter() {
                            option { value: "{language.id}", "{language.name}" }
                        }
                    }
                }

                label { "Sort " }
                select {
                    disabled: loading(),
                    value: "{sort_value}",
                    onchange: move |event| {
                        let value = event.value();
                        let key = (!value.is_empty()).then_some(value);
                        query.write().set_sort(key.clone());
                        link_bar.write().apply("sort", key.as_deref());
                        let order = key.map(|_| query.peek().sort_direction.as_str().to_string());
                        link_bar.write().apply("order", order.as_deref());
                    },
                    option { value: "", "Server order" }
                    for key in current_resource.sort_keys() {
                        option { value: "{key}", "{key}" }
                    }
                }
                button {
                    disabled: loading(),
                    onclick: move |_| {
                        query.write().toggle_sort_direction();
                        let order = query
                            .peek()
                            .sort_key
                            .is_some()
                            .then(|| query.peek().sort_direction.as_str().to_string());
                        link_bar.write().apply("order", order.as_deref());
                    },
                    "{sort_dir_label}"
                }

                button {
                    disabled: loading(),
                    onclick: move |_| {
                        let next = *refresh_tick.peek() + 1;
                        refresh_tick.set(next);
                    },
                    "Refresh"
                }

                button {
                    disabled: last_page().is_none(),
                    onclick: move |_| {
                        let Some(page) = last_page.peek().clone() else {
                            return;
                        };
                        let Some(target) = FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .set_file_name(format!("{}.csv", resource.peek().path()))
                            .save_file()
                        else {
                            *status.write() = "Export cancelled".to_string();
                            return;
                        };
                        let snapshot = query.peek().clone();
                        let first = u64::from(snapshot.page.saturating_sub(1))
                            * u64::from(snapshot.page_size);
                        match export_page_csv(&target, &resource.peek().columns(), &page.data, first)
                        {
                            Ok(count) => *status.write() = format!("Exported {count} rows"),
                            Err(err) => *status.write() = format!("Export failed: {err}"),
                        }
                    },
                    "Export page"
                }

                button {
                    onclick: move |_| {
                        auth_for_logout.logout();
                        session.set(None);
                        last_page.set(None);
                        last_error.set(None);
                        *status.write() = "Signed out".to_string();
                    },
                    "Sign out"
                }

                span { " {status}" }
            }

            div {
                style: "display: flex; gap: 6px; align-items: center; padding: 4px 0;",
                button {
                    onclick: move |_| {
                        if link_bar.write().back() {
                            restore_from_link();
                        }
                    },
                    "◀"
                }
                label { "Link " }
                input {
                    style: "flex: 1; font-family: monospace;",
                    value: link_input(),
                    oninput: move |event| link_input.set(event.value()),
                }
                button {
                    onclick: move |_| {
                        let pasted = link_input.peek().clone();
                        link_bar.write().navigate(&pasted);
                        restore_from_link();
                    },
                    "Go"
                }
            }

            if let Some(error) = last_error() {
                p { style: "color: #a33; margin: 4px 0;", "{error}" }
            }

            DataTable {
                columns: current_resource.columns(),
                page: last_page(),
                loading: loading(),
                page_number: current_page,
                page_size: current_page_size,
                on_first: move |_| {
                    let total = *total_pages.peek();
                    query.write().set_page(1, total);
                },
                on_prev: move |_| {
                    let total = *total_pages.peek();
                    let page = query.peek().page;
                    query.write().set_page(page.saturating_sub(1), total);
                },
                on_next: move |_| {
                    let total = *total_pages.peek();
                    let page = query.peek().page;
                    query.write().set_page(page + 1, total);
                },
                on_last: move |_| {
                    if let Some(total) = *total_pages.peek() {
                        query.write().set_page(total, Some(total));
                    }
                },
                on_page_size: move |size| {
                    query.write().set_page_size(size);
                },
                on_delete: move |row: crate::domain::column::Row| {
                    let Some(id) = row.get("id").and_then(|value| value.as_i64()) else {
                        *status.write() = "Row has no id".to_string();
                        return;
                    };
                    let confirmed = MessageDialog::new()
                        .set_level(MessageLevel::Warning)
                        .set_title("Confirm delete")
                        .set_description("Delete this record? This cannot be undone.")
                        .set_buttons(MessageButtons::YesNo)
                        .show();
                    if confirmed != MessageDialogResult::Yes {
                        return;
                    }
                    let service = list_for_delete.clone();
                    let target = *resource.peek();
                    spawn(async move {
                        match service.delete(target.path(), id).await {
                            Ok(outcome) if outcome.success => {
                                *status.write() = outcome.message;
                                // Invalidate and refetch; never splice the
                                // rendered page locally.
                                let next = *refresh_tick.peek() + 1;
                                refresh_tick.set(next);
                            }
                            Ok(outcome) => {
                                *status.write() = format!("Delete rejected: {}", outcome.message);
                            }
                            Err(err) => {
                                *status.write() = format!("Delete failed: {err}");
                            }
                        }
                    });
                },
            }
        }
    }
}
