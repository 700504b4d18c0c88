use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// Writes a default configuration file (skipped with `--test`) and tells the
/// user which keys still need a value.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(expand_tilde);
    let path = Config::init_file(custom.as_deref(), cli.test)?;

    info(format!("Config file : {}", path.display()));
    info("Set api.events_database and api.members_database before running `update`.");
    info(format!(
        "The API token can live in api.token or in ${}",
        crate::config::TOKEN_ENV
    ));

    success("stampchart initialization completed!");
    Ok(())
}
