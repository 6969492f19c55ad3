use super::winfo::Winfo;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// Desktop index meaning "present on every desktop".
pub const STICKY_DESKTOP: i64 = -1;

/// Shell-owned pseudo windows that capture layers usually drop.
const SYSTEM_NAMES: &[&str] = &[
    "Desktop",
    "XdndCollectionWindowImp",
    "unity-launcher",
    "unity-panel",
    "unity-dash",
    "Hud",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Desktop", default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<i64>,
}

impl Window {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            desktop: None,
        }
    }

    pub fn with_desktop(mut self, desktop: i64) -> Self {
        self.desktop = Some(desktop);
        self
    }

    /// Build a window whose id is derived from its name and desktop,
    /// for platforms that do not hand out stable window ids.
    pub fn hashed(name: impl Into<String>, desktop: Option<i64>) -> Self {
        let name = name.into();
        Self {
            id: Self::hashed_id(&name, desktop),
            name,
            desktop,
        }
    }

    pub fn hashed_id(name: &str, desktop: Option<i64>) -> i64 {
        let mut buf = Vec::with_capacity(name.len() + 9);
        buf.extend_from_slice(name.as_bytes());
        if let Some(d) = desktop {
            buf.push(0);
            buf.extend_from_slice(&d.to_le_bytes());
        }
        i64::from_le_bytes(xxh3_64(&buf).to_le_bytes())
    }

    /// Parsed application identity. Recomputed on every call.
    pub fn info(&self) -> Winfo {
        Winfo::parse(&self.name)
    }

    pub fn is_sticky(&self) -> bool {
        self.desktop == Some(STICKY_DESKTOP)
    }

    pub fn is_on_desktop(&self, desktop: i64) -> bool {
        self.is_sticky() || self.desktop == Some(desktop)
    }

    pub fn is_system(&self) -> bool {
        let name = self.name.trim();
        name.is_empty() || SYSTEM_NAMES.contains(&name)
    }
}
