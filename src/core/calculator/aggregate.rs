//! Sample counting per label across the active, visible and all-open tracks.

use crate::core::calculator::timeline::Track;
use crate::models::stream::Stream;
use crate::models::window::Window;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

/// Default ceiling for ranked views.
pub const MAX_NUMBER_OF_BARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub label: String,
    pub count: u64,
}

/// Label → accumulated count, remembering the order labels were first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChart {
    pub id: String,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub series: IndexMap<String, u64>,
}

impl BarChart {
    pub fn new(id: &str, x_label: &str, y_label: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            title: title.to_string(),
            series: IndexMap::new(),
        }
    }

    /// Add `n` to the count for `label`.
    pub fn plus(&mut self, label: impl Into<String>, n: u64) {
        *self.series.entry(label.into()).or_insert(0) += n;
    }

    pub fn count(&self, label: &str) -> u64 {
        self.series.get(label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.series.values().sum()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// The `n` highest counts, descending. Equal counts keep first-seen order.
    pub fn top_n(&self, n: usize) -> Vec<Bar> {
        let mut bars: Vec<Bar> = self
            .series
            .iter()
            .map(|(label, &count)| Bar {
                label: label.clone(),
                count,
            })
            .collect();
        // stable: ties stay in insertion order
        bars.sort_by(|a, b| b.count.cmp(&a.count));
        bars.truncate(n);
        bars
    }
}

/// Aggregate sample counts for the three tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggTime {
    pub active: BarChart,
    pub visible: BarChart,
    pub all: BarChart,
}

impl AggTime {
    pub fn chart(&self, track: Track) -> &BarChart {
        match track {
            Track::Active => &self.active,
            Track::Visible => &self.visible,
            Track::All => &self.all,
        }
    }

    pub fn charts(&self) -> impl Iterator<Item = (Track, &BarChart)> {
        Track::ALL.into_iter().map(move |t| (t, self.chart(t)))
    }
}

fn chart_for(track: Track, x_label: &str, max_bars: usize) -> BarChart {
    let what = match track {
        Track::Active => "active",
        Track::Visible => "visible",
        Track::All => "open",
    };
    BarChart::new(
        track.as_str(),
        x_label,
        "Samples",
        &format!("Top {max_bars} {what} {x_label}s by time (multiplied by window count)"),
    )
}

/// Count per-label samples over a stream.
///
/// - active: +1 for the active window's label, skipped when the active id
///   does not resolve to a window
/// - visible: +1 per visible id; unresolved ids count under `""`
/// - all: +1 per open window
pub fn aggregate<F>(stream: &Stream, label_of: F, x_label: &str, max_bars: usize) -> AggTime
where
    F: Fn(&Window) -> String,
{
    let mut active = chart_for(Track::Active, x_label, max_bars);
    let mut visible = chart_for(Track::Visible, x_label, max_bars);
    let mut all = chart_for(Track::All, x_label, max_bars);

    let mut skipped = 0usize;
    for snap in stream.snapshots() {
        let windows = snap.window_index();

        match windows.get(&snap.active) {
            Some(win) => active.plus(label_of(*win), 1),
            None => skipped += 1,
        }
        for id in &snap.visible {
            let label = windows.get(id).map(|w| label_of(*w)).unwrap_or_default();
            visible.plus(label, 1);
        }
        for win in &snap.windows {
            all.plus(label_of(win), 1);
        }
    }

    debug!(
        "aggregated {} snapshots ({} without a resolvable active window): {} active, {} visible, {} open labels",
        stream.len(),
        skipped,
        active.len(),
        visible.len(),
        all.len()
    );

    AggTime {
        active,
        visible,
        all,
    }
}
