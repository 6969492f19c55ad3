//! Path utilities: expand ~ and resolve command-line overrides against the config.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Pick the explicit path when given, otherwise the configured one.
pub fn resolve_or(explicit: Option<&String>, fallback: PathBuf) -> PathBuf {
    explicit.map(|p| expand_tilde(p)).unwrap_or(fallback)
}
