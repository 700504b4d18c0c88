use crate::errors::AppResult;
use crate::export::memory::MemorySink;
use crate::export::notify_export_success;
use crate::export::sheet::{CellWrite, SheetSink};
use crate::ui::messages::info;
use std::path::{Path, PathBuf};

/// Buffers the sheet and writes it as a dense CSV grid starting at A1.
pub struct CsvSink {
    path: PathBuf,
    sheet: MemorySink,
}

impl CsvSink {
    pub fn new(path: &Path, sheet_name: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            sheet: MemorySink::new(sheet_name),
        }
    }
}

impl SheetSink for CsvSink {
    fn sheet_name(&self) -> &str {
        self.sheet.sheet_name()
    }

    fn clear(&mut self) -> AppResult<()> {
        self.sheet.clear()
    }

    fn write(&mut self, cell: &CellWrite) -> AppResult<()> {
        self.sheet.write(cell)
    }

    fn finish(&mut self) -> AppResult<()> {
        info(format!("Writing CSV: {}", self.path.display()));

        let mut wtr = csv::Writer::from_path(&self.path)?;
        for row in self.sheet.to_grid() {
            wtr.write_record(&row)?;
        }
        wtr.flush()?;

        notify_export_success("CSV", &self.path);
        Ok(())
    }
}
