//! Time utilities: formatting timestamps and durations for CLI output.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, Local};
use std::fmt::Write;

/// Whether chrono understands every specifier in `fmt`.
pub fn is_valid_time_format(fmt: &str) -> bool {
    StrftimeItems::new(fmt).all(|item| !matches!(item, Item::Error))
}

/// Render `t` with `fmt`, falling back to RFC 3339 when `fmt` cannot be rendered.
pub fn format_time(t: &DateTime<Local>, fmt: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", t.format(fmt)) {
        Ok(()) => out,
        Err(_) => t.to_rfc3339(),
    }
}

/// `1h 05m 09s`, `5m 09s`, `9s`
pub fn format_duration(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}h {m:02}m {s:02}s")
    } else if m > 0 {
        format!("{m}m {s:02}s")
    } else {
        format!("{s}s")
    }
}
