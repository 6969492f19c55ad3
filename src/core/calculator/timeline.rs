use crate::models::snapshot::Snapshot;
use crate::models::stream::Stream;
use crate::models::window::Window;
use chrono::{DateTime, Duration, Local};
use log::{debug, trace};
use serde::Serialize;
use std::collections::HashMap;

/// One of the three parallel views over a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Track {
    Active,
    Visible,
    All,
}

impl Track {
    pub const ALL: [Track; 3] = [Track::Active, Track::Visible, Track::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Active => "Active",
            Track::Visible => "Visible",
            Track::All => "All",
        }
    }
}

/// A labeled, closed interval of time within one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Range {
    pub label: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl Range {
    fn open(label: String, at: DateTime<Local>) -> Self {
        Self {
            label,
            start: at,
            end: at,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub active: Vec<Range>,
    pub visible: Vec<Range>,
    pub all: Vec<Range>,
}

impl Timeline {
    pub fn row(&self, track: Track) -> &[Range] {
        match track {
            Track::Active => &self.active,
            Track::Visible => &self.visible,
            Track::All => &self.all,
        }
    }

    /// Rows keyed by track name, in `Track::ALL` order.
    pub fn rows(&self) -> impl Iterator<Item = (Track, &[Range])> {
        Track::ALL.into_iter().map(move |t| (t, self.row(t)))
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

// -----------------------------
// Active track: one label at a time
// -----------------------------
#[derive(Default)]
struct SingleTrack {
    ranges: Vec<Range>,
    open: Option<usize>,
}

impl SingleTrack {
    fn observe(&mut self, label: String, at: DateTime<Local>) {
        if let Some(i) = self.open
            && let Some(current) = self.ranges.get_mut(i)
        {
            // same label: extend; otherwise close at the transition instant
            current.end = at;
            if current.label == label {
                return;
            }
        }
        self.ranges.push(Range::open(label, at));
        self.open = Some(self.ranges.len() - 1);
    }
}

// -----------------------------
// Visible / All tracks: any number of labels at once
// -----------------------------
#[derive(Default)]
struct MultiTrack {
    ranges: Vec<Range>,
    open: HashMap<String, usize>,
}

impl MultiTrack {
    fn observe<I>(&mut self, labels: I, at: DateTime<Local>)
    where
        I: IntoIterator<Item = String>,
    {
        // grow everything still open up to this instant, including labels
        // that are about to disappear
        for &i in self.open.values() {
            if let Some(r) = self.ranges.get_mut(i) {
                r.end = at;
            }
        }

        let mut next = HashMap::with_capacity(self.open.len());
        for label in labels {
            if next.contains_key(&label) {
                continue;
            }
            let idx = match self.open.get(&label) {
                Some(&i) => i,
                None => {
                    self.ranges.push(Range::open(label.clone(), at));
                    self.ranges.len() - 1
                }
            };
            next.insert(label, idx);
        }
        self.open = next;
    }
}

/// Reconstruct coalesced usage ranges for the active, visible and
/// all-open tracks. `label_of` decides the grouping granularity.
///
/// Returns `None` for an empty stream. Unresolvable window ids label as `""`.
pub fn build_timeline<F>(stream: &Stream, label_of: F) -> Option<Timeline>
where
    F: Fn(&Window) -> String,
{
    let (first, last) = (stream.first()?, stream.last()?);

    let mut active = SingleTrack::default();
    let mut visible = MultiTrack::default();
    let mut all = MultiTrack::default();

    for snap in stream.snapshots() {
        let windows = snap.window_index();
        let label_at = |id: &i64| windows.get(id).map(|w| label_of(*w)).unwrap_or_default();

        active.observe(label_at(&snap.active), snap.time);
        visible.observe(snap.visible.iter().map(label_at), snap.time);
        all.observe(snap.windows.iter().map(&label_of), snap.time);

        trace_snapshot(snap, &active, &visible, &all);
    }

    debug!(
        "timeline over {} snapshots: {} active, {} visible, {} open ranges",
        stream.len(),
        active.ranges.len(),
        visible.ranges.len(),
        all.ranges.len()
    );

    Some(Timeline {
        start: first.time,
        end: last.time,
        active: active.ranges,
        visible: visible.ranges,
        all: all.ranges,
    })
}

fn trace_snapshot(snap: &Snapshot, active: &SingleTrack, visible: &MultiTrack, all: &MultiTrack) {
    trace!(
        "{}: active range {:?}, {} visible open, {} open",
        snap.time.to_rfc3339(),
        active.open,
        visible.open.len(),
        all.open.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::window::Window;
    use chrono::TimeZone;

    fn t(secs: i64) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap() + Duration::seconds(secs)
    }

    fn snap(secs: i64, windows: &[(i64, &str)], active: i64, visible: &[i64]) -> Snapshot {
        Snapshot {
            time: t(secs),
            windows: windows.iter().map(|(id, n)| Window::new(*id, *n)).collect(),
            active,
            visible: visible.to_vec(),
        }
    }

    fn by_name(w: &Window) -> String {
        w.name.clone()
    }

    fn labels(ranges: &[Range]) -> Vec<&str> {
        ranges.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn empty_stream_has_no_timeline() {
        assert!(build_timeline(&Stream::default(), by_name).is_none());
    }

    #[test]
    fn single_snapshot_gives_zero_length_ranges() {
        let stream = Stream::new(vec![snap(0, &[(1, "a"), (2, "b")], 1, &[1, 2])]).unwrap();
        let tl = build_timeline(&stream, by_name).unwrap();
        assert_eq!(tl.start, tl.end);
        assert_eq!(tl.active, vec![Range::open("a".into(), t(0))]);
        assert_eq!(labels(&tl.visible), vec!["a", "b"]);
        assert_eq!(labels(&tl.all), vec!["a", "b"]);
        assert!(tl.all.iter().all(|r| r.duration() == Duration::zero()));
    }

    #[test]
    fn constant_active_label_coalesces_into_one_range() {
        let stream = Stream::new(
            (0..5)
                .map(|i| snap(i * 30, &[(1, "a")], 1, &[1]))
                .collect(),
        )
        .unwrap();
        let tl = build_timeline(&stream, by_name).unwrap();
        assert_eq!(tl.active.len(), 1);
        assert_eq!(tl.active[0].start, t(0));
        assert_eq!(tl.active[0].end, t(120));
    }

    #[test]
    fn active_ranges_touch_at_transition() {
        let w = &[(1, "a"), (2, "b")];
        let stream = Stream::new(vec![
            snap(0, w, 1, &[]),
            snap(30, w, 1, &[]),
            snap(60, w, 2, &[]),
            snap(90, w, 2, &[]),
            snap(120, w, 1, &[]),
        ])
        .unwrap();
        let tl = build_timeline(&stream, by_name).unwrap();
        assert_eq!(labels(&tl.active), vec!["a", "b", "a"]);
        assert_eq!((tl.active[0].start, tl.active[0].end), (t(0), t(60)));
        assert_eq!((tl.active[1].start, tl.active[1].end), (t(60), t(120)));
        assert_eq!((tl.active[2].start, tl.active[2].end), (t(120), t(120)));
    }

    #[test]
    fn unresolved_active_id_is_empty_label() {
        let stream = Stream::new(vec![
            snap(0, &[(1, "a")], 1, &[]),
            snap(30, &[(1, "a")], 99, &[]),
            snap(60, &[(1, "a")], 99, &[]),
        ])
        .unwrap();
        let tl = build_timeline(&stream, by_name).unwrap();
        assert_eq!(labels(&tl.active), vec!["a", ""]);
        assert_eq!(tl.active[0].end, t(30));
        assert_eq!((tl.active[1].start, tl.active[1].end), (t(30), t(60)));
    }

    #[test]
    fn visible_label_churn_gives_two_ranges() {
        let w = &[(1, "a"), (2, "b")];
        let stream = Stream::new(vec![
            snap(0, w, 1, &[1, 2]),
            snap(30, w, 1, &[2]),
            snap(60, w, 1, &[1, 2]),
        ])
        .unwrap();
        let tl = build_timeline(&stream, by_name).unwrap();
        let a: Vec<&Range> = tl.visible.iter().filter(|r| r.label == "a").collect();
        assert_eq!(a.len(), 2);
        // the first run closes at the snapshot where it was no longer seen
        assert_eq!((a[0].start, a[0].end), (t(0), t(30)));
        assert_eq!((a[1].start, a[1].end), (t(60), t(60)));
        let b: Vec<&Range> = tl.visible.iter().filter(|r| r.label == "b").collect();
        assert_eq!(b.len(), 1);
        assert_eq!((b[0].start, b[0].end), (t(0), t(60)));
    }

    #[test]
    fn same_label_windows_share_one_range() {
        let w = &[(1, "x - Vim"), (2, "y - Vim")];
        let stream = Stream::new(vec![snap(0, w, 1, &[1, 2]), snap(30, w, 2, &[1, 2])]).unwrap();
        let by_app = |w: &Window| w.info().app;
        let tl = build_timeline(&stream, by_app).unwrap();
        assert_eq!(labels(&tl.active), vec!["Vim"]);
        assert_eq!(labels(&tl.visible), vec!["Vim"]);
        assert_eq!(labels(&tl.all), vec!["Vim"]);
        assert_eq!(tl.all[0].end, t(30));
    }

    #[test]
    fn unresolved_visible_id_labels_as_empty() {
        let stream = Stream::new(vec![snap(0, &[(1, "a")], 1, &[1, 42])]).unwrap();
        let tl = build_timeline(&stream, by_name).unwrap();
        assert_eq!(labels(&tl.visible), vec!["a", ""]);
        assert_eq!(labels(&tl.all), vec!["a"]);
    }

    #[test]
    fn bounds_follow_snapshots_not_ranges() {
        let stream = Stream::new(vec![
            snap(0, &[], 0, &[]),
            snap(30, &[(1, "a")], 1, &[1]),
            snap(60, &[], 0, &[]),
        ])
        .unwrap();
        let tl = build_timeline(&stream, by_name).unwrap();
        assert_eq!((tl.start, tl.end), (t(0), t(60)));
        assert_eq!(tl.duration(), Duration::seconds(60));
        assert_eq!(tl.all.len(), 1);
        assert_eq!((tl.all[0].start, tl.all[0].end), (t(30), t(60)));
    }

    #[test]
    fn ranges_are_ordered_and_never_adjacent_duplicates() {
        let w = &[(1, "a"), (2, "b"), (3, "c")];
        let stream = Stream::new(vec![
            snap(0, w, 1, &[1]),
            snap(10, w, 2, &[1, 3]),
            snap(20, w, 2, &[3]),
            snap(30, w, 3, &[1]),
            snap(40, w, 1, &[]),
        ])
        .unwrap();
        let tl = build_timeline(&stream, by_name).unwrap();
        for (_, row) in tl.rows() {
            assert!(row.iter().all(|r| r.start <= r.end));
        }
        assert!(tl.active.windows(2).all(|p| p[0].label != p[1].label));
    }

    #[test]
    fn rebuilding_yields_identical_output() {
        let w = &[(1, "a"), (2, "b"), (3, "c")];
        let stream = Stream::new(vec![
            snap(0, w, 1, &[1, 2, 3]),
            snap(10, w, 2, &[3, 1]),
            snap(20, &w[..2], 3, &[2]),
        ])
        .unwrap();
        assert_eq!(build_timeline(&stream, by_name), build_timeline(&stream, by_name));
    }
}
