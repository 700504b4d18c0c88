use crate::cli::commands::open_source;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ChartLogic;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_absolute, ensure_writable};
use crate::export::{CsvSink, ExportFormat, MemorySink, XlsxSink, export_json};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

/// Handle the `update` command: the menu action that rebuilds the chart.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        file,
        format,
        sheet,
        force,
        source,
    } = cmd
    {
        let path = expand_tilde(file);
        let sheet_name = sheet.as_deref().unwrap_or(&cfg.sheet.name);

        // before any fetch, prompt or file creation
        ChartLogic::check_sheet(cfg, sheet_name)?;

        ensure_absolute(&path)?;
        ensure_writable(&path, *force)?;

        let source = open_source(source, cfg)?;
        let now = ChartLogic::now(cfg)?;

        info(format!("Updating sheet \"{sheet_name}\" ({})", format.as_str()));

        let chart = match format {
            ExportFormat::Xlsx => {
                let mut sink = XlsxSink::new(&path, sheet_name)?;
                ChartLogic::update(cfg, source.as_ref(), &mut sink, &now)?
            }
            ExportFormat::Csv => {
                let mut sink = CsvSink::new(&path, sheet_name);
                ChartLogic::update(cfg, source.as_ref(), &mut sink, &now)?
            }
            ExportFormat::Json => {
                let mut sheet = MemorySink::new(sheet_name);
                let chart = ChartLogic::update(cfg, source.as_ref(), &mut sheet, &now)?;
                export_json(&chart, &sheet, &path)?;
                chart
            }
        };

        if chart.is_empty() {
            warning("No active members found: the chart is empty.");
        } else {
            info(format!("{} members charted", chart.len()));
        }
    }
    Ok(())
}
