use crate::errors::AppResult;
use crate::export::memory::MemorySink;
use crate::export::notify_export_success;
use crate::export::sheet::{CellValue, SheetSink};
use crate::models::StarChart;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    sheet: &'a str,
    chart: &'a StarChart,
    /// Rendered cells keyed by A1 address.
    cells: Vec<(String, CellValue)>,
}

/// Write the computed chart together with its rendered sheet, pretty-printed.
pub(crate) fn export_json(chart: &StarChart, sheet: &MemorySink, path: &Path) -> AppResult<()> {
    info(format!("Writing JSON: {}", path.display()));

    let report = JsonReport {
        sheet: sheet.sheet_name(),
        chart,
        cells: sheet.cells(),
    };
    let json_data = serde_json::to_string_pretty(&report)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
