/// ANSI color helper utilities for terminal output.
use crate::core::calculator::timeline::Track;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Header color per track: active green, visible cyan, all-open yellow.
pub fn color_for_track(track: Track) -> &'static str {
    match track {
        Track::Active => GREEN,
        Track::Visible => CYAN,
        Track::All => YELLOW,
    }
}

/// Grey out the placeholder shown for the empty ("no window") label.
pub fn colorize_label(label: &str, is_placeholder: bool) -> String {
    if is_placeholder {
        format!("{GREY}{label}{RESET}")
    } else {
        label.to_string()
    }
}
