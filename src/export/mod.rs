mod fs_utils;
mod json_csv;
mod model;

pub use model::EntryExport;

use crate::errors::AppResult;
use crate::models::Entry;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion line for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path, count: usize) {
    success(format!(
        "{label} export completed: {count} entries → {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Write `entries` to `file` in the chosen format.
/// An existing file is only replaced with `force` or after confirmation.
pub fn export_entries(
    entries: &[Entry],
    format: ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);
    fs_utils::ensure_writable(path, force)?;

    let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();

    match format {
        ExportFormat::Csv => json_csv::export_csv(&rows, path),
        ExportFormat::Json => json_csv::export_json(&rows, path),
    }
}
