use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::tracker::{JsonTracker, Tracker};
use crate::errors::AppResult;
use crate::models::stream::Stream;
use crate::ui::messages::success;
use crate::utils::path::resolve_or;
use std::io;

/// Handle the `track` command: one snapshot from stdin, appended to the stream.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Track { print } = &cli.command else {
        return Ok(());
    };

    let mut tracker = JsonTracker::new(io::stdin().lock());
    record(&mut tracker, cli.input.as_ref(), cfg, *print)
}

pub(crate) fn record<T: Tracker + ?Sized>(
    tracker: &mut T,
    input: Option<&String>,
    cfg: &Config,
    print: bool,
) -> AppResult<()> {
    let snap = tracker.snap()?;

    if print {
        println!("{}", serde_json::to_string_pretty(&snap)?);
        return Ok(());
    }

    let path = resolve_or(input, cfg.stream_path());
    let mut stream = Stream::load_or_default(&path)?;
    stream.push(snap)?;
    stream.save(&path)?;

    success(format!(
        "Snapshot stored ({} total) in {}",
        stream.len(),
        path.display()
    ));
    Ok(())
}
