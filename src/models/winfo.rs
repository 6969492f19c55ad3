//! Heuristic decomposition of a window's display name.

use serde::Serialize;

/// Separator most applications put between document and application name.
pub const TITLE_SEPARATOR: &str = " - ";

const CHROME: &str = "Google Chrome";
const SLACK: &str = "Slack";

/// Application identity parsed out of a window name.
///
/// `app` and `sub_app` may be empty; `title` holds whatever is left.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Winfo {
    pub app: String,
    pub sub_app: String,
    pub title: String,
}

impl Winfo {
    /// Parse a window name into `{app, sub_app, title}`.
    ///
    /// Order matters:
    /// - `"... - <sub app> - Google Chrome"` → Chrome, with the site as sub app
    /// - `"Slack - <workspace> - <channel>"` → Slack, with everything after it as sub app
    /// - `"<title> - <app>"` → the last segment is the app
    ///
    /// Never fails; a name without separator becomes the title.
    pub fn parse(name: &str) -> Self {
        let fields: Vec<&str> = name.split(TITLE_SEPARATOR).collect();

        let (first, rest) = match fields.split_first() {
            Some((first, rest)) if !rest.is_empty() => (first.trim(), rest),
            _ => {
                return Self {
                    title: name.to_string(),
                    ..Self::default()
                };
            }
        };

        let Some((last, head)) = fields.split_last() else {
            return Self::default();
        };
        let last = last.trim();

        if last == CHROME {
            // at least two segments here, so `head` is non-empty
            let (sub_app, title) = match head.split_last() {
                Some((sub_app, title)) => (sub_app.trim(), title.join(TITLE_SEPARATOR)),
                None => ("", String::new()),
            };
            return Self {
                app: CHROME.to_string(),
                sub_app: sub_app.to_string(),
                title,
            };
        }

        if first == SLACK {
            return Self {
                app: SLACK.to_string(),
                sub_app: rest.join(TITLE_SEPARATOR).trim().to_string(),
                title: String::new(),
            };
        }

        Self {
            app: last.to_string(),
            sub_app: String::new(),
            title: head.join(TITLE_SEPARATOR),
        }
    }

    /// Best application-level label: app, then sub app, then title.
    /// Returns `None` when all three are empty.
    pub fn app_label(&self) -> Option<&str> {
        [&self.app, &self.sub_app, &self.title]
            .into_iter()
            .map(String::as_str)
            .find(|s| !s.is_empty())
    }
}
