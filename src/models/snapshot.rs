use super::window::Window;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single observation of all windows, the active one and the visible set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "Time")]
    pub time: DateTime<Local>,
    #[serde(rename = "Windows", default)]
    pub windows: Vec<Window>,
    #[serde(rename = "Active", default)]
    pub active: i64,
    #[serde(rename = "Visible", default)]
    pub visible: Vec<i64>,
}

impl Snapshot {
    pub fn new(time: DateTime<Local>) -> Self {
        Self {
            time,
            windows: Vec::new(),
            active: 0,
            visible: Vec::new(),
        }
    }

    /// Look up a window by id. Ids are unique within a snapshot.
    pub fn window(&self, id: i64) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Id → window map for repeated lookups within one snapshot.
    pub fn window_index(&self) -> HashMap<i64, &Window> {
        self.windows.iter().map(|w| (w.id, w)).collect()
    }

    /// The active window, if its id refers to a window in this snapshot.
    pub fn active_window(&self) -> Option<&Window> {
        self.window(self.active)
    }

    /// Visible ids resolved to windows, in `visible` order.
    /// Ids with no matching window yield `None`.
    pub fn visible_windows(&self) -> impl Iterator<Item = Option<&Window>> {
        self.visible.iter().map(|id| self.window(*id))
    }
}
