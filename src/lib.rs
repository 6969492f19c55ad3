//! rWinTime library root.
//! Exposes the CLI parser, the high-level run() function and the
//! reconstruction engine over window snapshot streams.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Track { .. } => cli::commands::track::handle(cli, cfg),
        Commands::Info => cli::commands::info::handle(),
        Commands::Deps => cli::commands::deps::handle(),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Logging goes to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    // a second init (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_logging();

    let cli = Cli::parse();

    // a broken config only blocks commands that need it
    let cfg = match &cli.command {
        Commands::Init { .. } | Commands::Deps | Commands::Info => {
            Config::load().unwrap_or_default()
        }
        _ => Config::load()?,
    };

    dispatch(&cli, &cfg)
}
