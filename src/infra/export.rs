use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::column::{ColumnDescriptor, Row};

/// Writes the currently rendered page to a CSV file, using the column labels
/// as the header and the same renderers the table uses, so the file matches
/// what the admin sees. Returns the number of data rows written.
pub fn export_page_csv(
    path: &Path,
    columns: &[ColumnDescriptor],
    rows: &[Row],
    first_absolute_index: u64,
) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create csv: {}", path.display()))?;

    writer
        .write_record(columns.iter().map(|column| column.label))
        .context("failed to write csv header")?;

    for (offset, row) in rows.iter().enumerate() {
        let absolute = first_absolute_index + offset as u64;
        writer
            .write_record(columns.iter().map(|column| column.cell_text(row, absolute)))
            .context("failed to write csv row")?;
    }

    writer.flush().context("failed to flush csv")?;
    Ok(rows.len())
}
