use crate::errors::AppResult;
use crate::export::sheet::{CellValue, CellWrite, SheetSink};
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

/// Sheet kept in memory; later writes to the same cell win.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    name: String,
    cells: BTreeMap<(u32, u32), CellValue>,
    writes: usize,
}

impl MemorySink {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Value at a 1-based position.
    pub fn get(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    /// Text at a 1-based position, empty when the cell was never written.
    pub fn text(&self, row: u32, col: u32) -> String {
        self.get(row, col).map(CellValue::as_text).unwrap_or_default()
    }

    /// Number of writes received since the last clear.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Non-empty cells keyed by A1 address, in row-major order.
    pub fn cells(&self) -> Vec<(String, CellValue)> {
        self.cells
            .iter()
            .map(|(&(row, col), v)| {
                let w = CellWrite {
                    row,
                    col,
                    value: v.clone(),
                };
                (w.a1(), w.value)
            })
            .collect()
    }

    /// Dense grid from A1 to the last used row/column.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        let max_row = self.cells.keys().map(|(r, _)| *r).max().unwrap_or(0);
        let max_col = self.cells.keys().map(|(_, c)| *c).max().unwrap_or(0);

        (1..=max_row)
            .map(|r| (1..=max_col).map(|c| self.text(r, c)).collect())
            .collect()
    }

    /// Grid padded to display width, for terminal output.
    pub fn render_table(&self) -> String {
        let grid = self.to_grid();
        let cols = grid.first().map(Vec::len).unwrap_or(0);

        let mut widths = vec![0usize; cols];
        for row in &grid {
            for (c, v) in row.iter().enumerate() {
                widths[c] = widths[c].max(UnicodeWidthStr::width(v.as_str()));
            }
        }

        let mut out = String::new();
        for row in &grid {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(c, v)| {
                    let pad = widths[c] - UnicodeWidthStr::width(v.as_str());
                    format!("{v}{}", " ".repeat(pad))
                })
                .collect();
            out.push_str(line.join(" ").trim_end());
            out.push('\n');
        }
        out
    }
}

impl SheetSink for MemorySink {
    fn sheet_name(&self) -> &str {
        &self.name
    }

    fn clear(&mut self) -> AppResult<()> {
        self.cells.clear();
        self.writes = 0;
        Ok(())
    }

    fn write(&mut self, cell: &CellWrite) -> AppResult<()> {
        self.cells.insert((cell.row, cell.col), cell.value.clone());
        self.writes += 1;
        Ok(())
    }

    fn finish(&mut self) -> AppResult<()> {
        Ok(())
    }
}
