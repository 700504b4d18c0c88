// src/export/mod.rs

mod csv_sink;
pub(crate) mod fs_utils;
mod json;
pub mod layout;
mod memory;
pub mod sheet;
mod xlsx;

pub use csv_sink::CsvSink;
pub(crate) use json::export_json;
pub use layout::{START_COLUMN, START_ROW, col_name, plan};
pub use memory::MemorySink;
pub use sheet::{CellValue, CellWrite, SheetSink};
pub use xlsx::XlsxSink;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every output format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} star chart written: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
