use dioxus::prelude::*;

use crate::domain::column::{ColumnDescriptor, Row};
use crate::domain::page::{PageMeta, PageResult};
use crate::domain::query::PAGE_SIZES;

const CELL_STYLE: &str = "border: 1px solid #bbb; padding: 6px;";
const HEADER_STYLE: &str = "border: 1px solid #bbb; padding: 6px; background: #f2f2f2; text-align: left;";

/// Generic paginated table. Stateless with respect to data semantics: the
/// column descriptors decide what each cell shows, the owning view decides
/// what the pager callbacks do. Paging buttons are enabled purely from the
/// server-provided metadata.
#[component]
pub fn DataTable(
    columns: Vec<ColumnDescriptor>,
    page: Option<PageResult<Row>>,
    loading: bool,
    page_number: u32,
    page_size: u32,
    on_first: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_last: EventHandler<()>,
    on_page_size: EventHandler<u32>,
    on_delete: EventHandler<Row>,
) -> Element {
    let meta: PageMeta = page.as_ref().map(|p| p.pagination).unwrap_or_default();
    let range = page
        .as_ref()
        .map(|p| p.range_label(page_number, page_size))
        .unwrap_or_else(|| "0 of 0".to_string());
    let rows: Vec<Row> = page.as_ref().map(|p| p.data.clone()).unwrap_or_default();
    let column_count = columns.len() + 1;
    let first_index = u64::from(page_number.saturating_sub(1)) * u64::from(page_size);
    let prev_blocked = loading || !meta.has_previous_page;
    let next_blocked = loading || !meta.has_next_page;

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center; padding: 6px 0;",
            button {
                disabled: prev_blocked,
                onclick: move |_| on_first.call(()),
                "⏮ First"
            }
            button {
                disabled: prev_blocked,
                onclick: move |_| on_prev.call(()),
                "‹ Prev"
            }
            button {
                disabled: next_blocked,
                onclick: move |_| on_next.call(()),
                "Next ›"
            }
            button {
                disabled: next_blocked,
                onclick: move |_| on_last.call(()),
                "Last ⏭"
            }
            span { "{range}" }
            label {
                style: "margin-left: auto;",
                "Per page "
                select {
                    disabled: loading,
                    value: "{page_size}",
                    onchange: move |event| {
                        if let Ok(size) = event.value().parse::<u32>() {
                            on_page_size.call(size);
                        }
                    },
                    for size in PAGE_SIZES {
                        option { value: "{size}", "{size}" }
                    }
                }
            }
        }

        table { style: "border-collapse: collapse; width: 100%; border: 1px solid #bbb;",
            thead {
                tr {
                    for column in columns.iter() {
                        th {
                            style: match column.width_hint {
                                Some(width) => format!("{HEADER_STYLE} width: {width};"),
                                None => HEADER_STYLE.to_string(),
                            },
                            "{column.label}"
                        }
                    }
                    th { style: "{HEADER_STYLE} width: 80px;", "Actions" }
                }
            }
            tbody {
                if loading {
                    tr {
                        td {
                            style: "{CELL_STYLE} text-align: center; color: #777;",
                            colspan: "{column_count}",
                            "Loading…"
                        }
                    }
                } else if rows.is_empty() {
                    tr {
                        td {
                            style: "{CELL_STYLE} text-align: center; color: #777;",
                            colspan: "{column_count}",
                            "No data"
                        }
                    }
                } else {
                    for (index, row) in rows.into_iter().enumerate() {
                        tr {
                            for column in columns.iter() {
                                td {
                                    style: CELL_STYLE,
                                    "{column.cell_text(&row, first_index + index as u64)}"
                                }
                            }
                            td {
                                style: CELL_STYLE,
                                button {
                                    onclick: {
                                        let row = row.clone();
                                        move |_| on_delete.call(row.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
