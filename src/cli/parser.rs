use crate::core::labels::LabelMode;
use crate::export::{ExportFormat, ExportWhat};
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rWinTime
/// CLI application to turn window snapshots into usage timelines
#[derive(Parser)]
#[command(
    name = "rwintime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconstruct which windows you used, and for how long, from periodic window snapshots",
    long_about = None
)]
pub struct Cli {
    /// Override the stream file (default: the one in the configuration)
    #[arg(global = true, long = "in", short = 'i', value_name = "FILE")]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ShowWhat {
    /// Every snapshot with its windows
    #[default]
    List,
    /// Top applications/windows per track
    Stats,
    /// Reconstructed ranges per track
    Timeline,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Read one snapshot (JSON) from stdin and append it to the stream file
    Track {
        #[arg(long = "print", help = "Print the snapshot instead of storing it")]
        print: bool,
    },

    /// Read one snapshot (JSON) from stdin and print each window's parsed identity
    Info,

    /// Show what a snapshot producer has to send
    Deps,

    /// Summarize the stream file
    Show {
        #[arg(long, short = 'w', value_enum, default_value = "list")]
        what: ShowWhat,

        #[arg(long, value_enum, help = "Group by raw window name or by application")]
        by: Option<LabelMode>,

        #[arg(long, help = "Number of bars per chart (default: max_bars from config)")]
        top: Option<usize>,

        #[arg(
            long,
            short = 'p',
            help = "Only snapshots in YYYY, YYYY-MM, YYYY-MM-DD or a start:end range"
        )]
        period: Option<String>,

        #[arg(long = "no-system", help = "Drop desktop-shell pseudo windows")]
        no_system: bool,
    },

    /// Export timeline ranges or ranked statistics
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'w', value_enum, default_value = "timeline")]
        what: ExportWhat,

        #[arg(long, value_enum)]
        by: Option<LabelMode>,

        #[arg(long, short = 'p', value_name = "PERIOD")]
        period: Option<String>,

        #[arg(long = "no-system")]
        no_system: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
