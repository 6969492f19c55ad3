use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file with defaults
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { force } = &cli.command else {
        return Ok(());
    };

    let path = Config::config_file();
    if path.exists() && !*force {
        warning(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    let cfg = Config::default();
    let written = cfg.save()?;

    info(format!("Config file : {}", written.display()));
    info(format!("Stream file : {}", cfg.stream_file));
    success("rWinTime initialization completed!");
    Ok(())
}
