pub mod config;
pub mod deps;
pub mod export;
pub mod info;
pub mod init;
pub mod show;
pub mod track;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::stream::Stream;
use crate::utils::date::parse_period;
use crate::utils::path::resolve_or;
use log::debug;

/// Load the stream named on the command line (or in the config) and apply
/// the period and system-window filters shared by `show` and `export`.
pub(crate) fn load_filtered(
    input: Option<&String>,
    cfg: &Config,
    period: Option<&String>,
    no_system: bool,
) -> AppResult<Stream> {
    let path = resolve_or(input, cfg.stream_path());
    let mut stream = Stream::load(&path)?;

    if let Some(p) = period {
        let (from, to) = parse_period(p)?;
        stream = stream.between_dates(from, to);
        debug!("period {p}: {} snapshots left", stream.len());
    }
    if no_system {
        stream = stream.without_system();
    }
    Ok(stream)
}
