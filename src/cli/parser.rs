use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for stampchart
/// Renders the 1on1 stamp rally log as a member × member star chart
#[derive(Parser)]
#[command(
    name = "stampchart",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render the 1on1 stamp rally log as a star chart workbook",
    long_about = None
)]
pub struct Cli {
    /// Use a custom configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the stamp rally log and the member roster are read from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// API token (overrides STAMPCHART_TOKEN and api.token)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Read the stamp rally log from a saved query response instead of the API
    #[arg(long = "events-json", value_name = "FILE", requires = "members_json")]
    pub events_json: Option<String>,

    /// Read the member roster from a saved query response instead of the API
    #[arg(long = "members-json", value_name = "FILE", requires = "events_json")]
    pub members_json: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Fetch both databases and rewrite the star chart ("表を更新")
    Update {
        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Name of the sheet to write; must match `sheet.name` in the configuration
        #[arg(long, value_name = "NAME")]
        sheet: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the star chart to the terminal
    Show {
        #[command(flatten)]
        source: SourceArgs,
    },
}
