use crate::errors::{AppError, AppResult};
use crate::export::layout::{START_COLUMN, START_ROW};
use crate::export::notify_export_success;
use crate::export::sheet::{CellValue, CellWrite, SheetSink};
use crate::ui::messages::info;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

/// Writes the chart into a single-sheet XLSX workbook.
pub struct XlsxSink {
    path: PathBuf,
    name: String,
    worksheet: Worksheet,
    col_widths: BTreeMap<u16, usize>,
}

impl XlsxSink {
    pub fn new(path: &Path, sheet_name: &str) -> AppResult<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            name: sheet_name.to_string(),
            worksheet: named_worksheet(sheet_name)?,
            col_widths: BTreeMap::new(),
        })
    }
}

fn named_worksheet(name: &str) -> AppResult<Worksheet> {
    let mut ws = Worksheet::new();
    ws.set_name(name)?;
    Ok(ws)
}

impl SheetSink for XlsxSink {
    fn sheet_name(&self) -> &str {
        &self.name
    }

    fn clear(&mut self) -> AppResult<()> {
        self.worksheet = named_worksheet(&self.name)?;
        self.col_widths.clear();
        Ok(())
    }

    fn write(&mut self, cell: &CellWrite) -> AppResult<()> {
        // rust_xlsxwriter is 0-based
        let row = cell.row - 1;
        let col = u16::try_from(cell.col - 1)
            .map_err(|_| AppError::Export(format!("column out of range: {}", cell.col)))?;

        let marker_format = Format::new()
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);

        match &cell.value {
            CellValue::Text(s) if cell.row > START_ROW + 1 && cell.col > START_COLUMN => {
                self.worksheet
                    .write_string_with_format(row, col, s, &marker_format)?;
            }
            CellValue::Text(s) => {
                self.worksheet.write_string(row, col, s)?;
            }
            CellValue::Number(n) => {
                self.worksheet.write_number(row, col, *n)?;
            }
            CellValue::Formula(f) => {
                self.worksheet.write_formula(row, col, f.as_str())?;
            }
        }

        // A1 holds the long timestamp; keep it out of the width calculation.
        if cell.row > 1 {
            let w = UnicodeWidthStr::width(cell.value.as_text().as_str());
            let entry = self.col_widths.entry(col).or_insert(0);
            *entry = (*entry).max(w);
        }

        Ok(())
    }

    fn finish(&mut self) -> AppResult<()> {
        info(format!("Writing XLSX: {}", self.path.display()));

        for (&col, &w) in &self.col_widths {
            self.worksheet.set_column_width(col, w as f64 + 2.0)?;
        }
        self.worksheet
            .set_freeze_panes(START_ROW + 1, START_COLUMN as u16)?;

        let worksheet = std::mem::replace(&mut self.worksheet, named_worksheet(&self.name)?);
        let mut workbook = Workbook::new();
        workbook.push_worksheet(worksheet);
        workbook.save(&self.path)?;

        notify_export_success("XLSX", &self.path);
        Ok(())
    }
}
