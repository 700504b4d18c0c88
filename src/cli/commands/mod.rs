pub mod config;
pub mod init;
pub mod show;
pub mod update;

use crate::cli::parser::SourceArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::notion::{DataSource, FileSource, NotionSource};
use crate::utils::path::expand_tilde;

/// Pick the data source selected on the command line.
pub(crate) fn open_source(args: &SourceArgs, cfg: &Config) -> AppResult<Box<dyn DataSource>> {
    match (&args.events_json, &args.members_json) {
        (Some(events), Some(members)) => Ok(Box::new(FileSource::new(
            expand_tilde(events),
            expand_tilde(members),
        ))),
        _ => Ok(Box::new(NotionSource::from_config(cfg, args.token.as_deref())?)),
    }
}
