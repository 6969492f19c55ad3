//! Snapshot sources.
//!
//! Capturing windows is platform work done outside this crate; anything that
//! can hand over a `Snapshot` plugs in through `Tracker`.

use crate::errors::{AppError, AppResult};
use crate::models::snapshot::Snapshot;
use crate::models::stream::Stream;
use std::collections::VecDeque;
use std::io::Read;

pub trait Tracker {
    /// Take one snapshot of the current windows.
    fn snap(&mut self) -> AppResult<Snapshot>;

    /// Human readable notes about what this tracker needs to work.
    fn deps(&self) -> String;
}

/// Reads a single JSON-encoded snapshot per call from a reader,
/// e.g. the output of an external capture script piped to stdin.
pub struct JsonTracker<R: Read> {
    reader: R,
}

impl<R: Read> JsonTracker<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> Tracker for JsonTracker<R> {
    fn snap(&mut self) -> AppResult<Snapshot> {
        let mut de = serde_json::Deserializer::from_reader(&mut self.reader).into_iter::<Snapshot>();
        match de.next() {
            Some(snap) => Ok(snap?),
            None => Err(AppError::TrackerExhausted),
        }
    }

    fn deps(&self) -> String {
        "Pipe one snapshot as JSON, e.g.\n  \
         {\"Time\": \"2025-03-01T09:00:00+01:00\", \"Windows\": [{\"ID\": 1, \"Name\": \"notes.txt - Vim\"}], \"Active\": 1, \"Visible\": [1]}"
            .to_string()
    }
}

/// Hands out the snapshots of an already collected stream, oldest first.
pub struct ReplayTracker {
    pending: VecDeque<Snapshot>,
}

impl ReplayTracker {
    pub fn new(stream: &Stream) -> Self {
        Self {
            pending: stream.snapshots().iter().cloned().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl Tracker for ReplayTracker {
    fn snap(&mut self) -> AppResult<Snapshot> {
        self.pending.pop_front().ok_or(AppError::TrackerExhausted)
    }

    fn deps(&self) -> String {
        String::new()
    }
}

/// Pull `n` snapshots from a tracker into a fresh stream.
pub fn collect<T: Tracker + ?Sized>(tracker: &mut T, n: usize) -> AppResult<Stream> {
    let mut stream = Stream::default();
    for _ in 0..n {
        stream.push(tracker.snap()?)?;
    }
    Ok(stream)
}
