use crate::cli::commands::load_filtered;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        what,
        by,
        period,
        no_system,
        force,
    } = &cli.command
    {
        let stream = load_filtered(cli.input.as_ref(), cfg, period.as_ref(), *no_system)?;
        let mode = by.unwrap_or(cfg.label_mode);
        let report =
            Core::build_report(&stream, mode, cfg.max_bars).ok_or(AppError::EmptyStream)?;

        ExportLogic::export(
            &report,
            *format,
            *what,
            &expand_tilde(file),
            cfg.max_bars,
            *force,
        )?;
    }
    Ok(())
}
