use crate::errors::AppResult;
use serde::Serialize;

/// Value of a single positioned write.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Formula(String),
}

impl CellValue {
    /// Plain-text rendering used by CSV and the terminal preview.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) | CellValue::Formula(s) => s.clone(),
            CellValue::Number(n) => crate::utils::formatting::format_number(*n),
        }
    }
}

/// A write at a 1-based (row, column) position, as a spreadsheet addresses it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellWrite {
    pub row: u32,
    pub col: u32,
    pub value: CellValue,
}

impl CellWrite {
    pub fn text(row: u32, col: u32, s: impl Into<String>) -> Self {
        Self {
            row,
            col,
            value: CellValue::Text(s.into()),
        }
    }

    pub fn number(row: u32, col: u32, n: f64) -> Self {
        Self {
            row,
            col,
            value: CellValue::Number(n),
        }
    }

    pub fn formula(row: u32, col: u32, f: impl Into<String>) -> Self {
        Self {
            row,
            col,
            value: CellValue::Formula(f.into()),
        }
    }

    /// A1-style address of this write.
    pub fn a1(&self) -> String {
        format!("{}{}", crate::export::layout::col_name(self.col), self.row)
    }
}

/// Output port the update run renders into.
pub trait SheetSink {
    /// Name of the sheet that will receive the writes.
    fn sheet_name(&self) -> &str;

    /// Drop everything previously written to the sheet.
    fn clear(&mut self) -> AppResult<()>;

    fn write(&mut self, cell: &CellWrite) -> AppResult<()>;

    /// Flush the sheet to its destination.
    fn finish(&mut self) -> AppResult<()>;
}
