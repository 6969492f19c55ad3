//! Time-ordered snapshot sequence and its on-disk JSON form.

use super::snapshot::Snapshot;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Snapshots in non-decreasing time order.
///
/// The ordering is checked on construction, on `push` and on
/// deserialization, so the engines can rely on it without re-sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStream")]
pub struct Stream {
    #[serde(rename = "Snapshots")]
    snapshots: Vec<Snapshot>,
}

#[derive(Deserialize)]
struct RawStream {
    #[serde(rename = "Snapshots", default)]
    snapshots: Vec<Snapshot>,
}

impl TryFrom<RawStream> for Stream {
    type Error = AppError;

    fn try_from(raw: RawStream) -> AppResult<Self> {
        Stream::new(raw.snapshots)
    }
}

impl Stream {
    pub fn new(snapshots: Vec<Snapshot>) -> AppResult<Self> {
        for (index, pair) in snapshots.windows(2).enumerate() {
            if let [prev, next] = pair {
                check_order(prev, next, index + 1)?;
            }
        }
        Ok(Self { snapshots })
    }

    /// Append a snapshot; it must not be older than the current last one.
    pub fn push(&mut self, snap: Snapshot) -> AppResult<()> {
        if let Some(last) = self.snapshots.last() {
            check_order(last, &snap, self.snapshots.len())?;
        }
        self.snapshots.push(snap);
        Ok(())
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Copy of the stream with shell pseudo windows removed from every
    /// snapshot, including their ids in the visible set.
    pub fn without_system(&self) -> Self {
        let snapshots = self
            .snapshots
            .iter()
            .map(|snap| {
                let dropped: HashSet<i64> = snap
                    .windows
                    .iter()
                    .filter(|w| w.is_system())
                    .map(|w| w.id)
                    .collect();
                Snapshot {
                    time: snap.time,
                    windows: snap
                        .windows
                        .iter()
                        .filter(|w| !dropped.contains(&w.id))
                        .cloned()
                        .collect(),
                    active: snap.active,
                    visible: snap
                        .visible
                        .iter()
                        .copied()
                        .filter(|id| !dropped.contains(id))
                        .collect(),
                }
            })
            .collect();
        Self { snapshots }
    }

    /// Snapshots whose local date falls within `[from, to]`, inclusive.
    pub fn between_dates(&self, from: NaiveDate, to: NaiveDate) -> Self {
        let snapshots = self
            .snapshots
            .iter()
            .filter(|s| {
                let day = s.time.date_naive();
                from <= day && day <= to
            })
            .cloned()
            .collect();
        Self { snapshots }
    }

    /// Read a stream from a JSON file.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::StreamNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let stream: Stream = serde_json::from_str(&content)?;
        debug!(
            "loaded {} snapshots from {}",
            stream.len(),
            path.display()
        );
        Ok(stream)
    }

    /// Like `load`, but a missing file is an empty stream.
    pub fn load_or_default(path: &Path) -> AppResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        debug!("saved {} snapshots to {}", self.len(), path.display());
        Ok(())
    }
}

fn check_order(prev: &Snapshot, next: &Snapshot, index: usize) -> AppResult<()> {
    if next.time < prev.time {
        return Err(AppError::UnorderedStream {
            index,
            previous: prev.time,
            time: next.time,
        });
    }
    Ok(())
}
