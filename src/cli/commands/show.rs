use crate::cli::commands::open_source;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ChartLogic;
use crate::errors::AppResult;
use crate::export::MemorySink;
use crate::ui::messages::header;

/// Handle the `show` command: same run as `update`, printed instead of saved.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { source } = cmd {
        let source = open_source(source, cfg)?;
        let now = ChartLogic::now(cfg)?;

        let mut sheet = MemorySink::new(&cfg.sheet.name);
        ChartLogic::update(cfg, source.as_ref(), &mut sheet, &now)?;

        header(&cfg.sheet.name);
        print!("{}", sheet.render_table());
    }
    Ok(())
}
