use chrono::DateTime;
use serde_json::Value;

/// A table row as returned by the backend. Per-resource column descriptors
/// give the untyped object its shape.
pub type Row = Value;

/// Pure cell renderer: (cell value, whole row, absolute row index) → text.
/// The absolute index is `(page - 1) * page_size + index_in_page`.
pub type CellRender = fn(&Value, &Row, u64) -> String;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDescriptor {
    pub label: &'static str,
    pub accessor_key: &'static str,
    pub width_hint: Option<&'static str>,
    pub render: CellRender,
}

impl ColumnDescriptor {
    pub fn new(label: &'static str, accessor_key: &'static str) -> Self {
        Self {
            label,
            accessor_key,
            width_hint: None,
            render: display_cell,
        }
    }

    pub fn with_width(mut self, width: &'static str) -> Self {
        self.width_hint = Some(width);
        self
    }

    pub fn with_render(mut self, render: CellRender) -> Self {
        self.render = render;
        self
    }

    pub fn cell_text(&self, row: &Row, absolute_index: u64) -> String {
        let cell = row.get(self.accessor_key).cloned().unwrap_or(Value::Null);
        (self.render)(&cell, row, absolute_index)
    }
}

/// Default renderer: strings verbatim, numbers and booleans in display form,
/// null and missing keys as empty text.
pub fn display_cell(cell: &Value, _row: &Row, _index: u64) -> String {
    match cell {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// 1-based absolute row number, independent of the cell value.
pub fn render_row_number(_cell: &Value, _row: &Row, index: u64) -> String {
    (index + 1).to_string()
}

/// RFC 3339 timestamps as local-free "YYYY-MM-DD HH:MM"; anything else is
/// passed through untouched.
pub fn render_timestamp(cell: &Value, row: &Row, index: u64) -> String {
    match cell {
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| text.clone()),
        other => display_cell(other, row, index),
    }
}
