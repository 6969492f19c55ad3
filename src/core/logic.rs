use crate::core::calculator::{aggregate, timeline};
use crate::core::labels::LabelMode;
use crate::models::{report::Report, stream::Stream, window::Window};

pub struct Core;

impl Core {
    /// Run both passes over `stream` with the label function for `mode`.
    /// `None` when the stream has no snapshots.
    pub fn build_report(stream: &Stream, mode: LabelMode, max_bars: usize) -> Option<Report> {
        let label_of = |w: &Window| mode.label(w);
        let timeline = timeline::build_timeline(stream, label_of)?;
        let agg = aggregate::aggregate(stream, label_of, mode.x_label(), max_bars);

        Some(Report {
            mode,
            snapshots: stream.len(),
            timeline,
            agg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::snapshot::Snapshot;
    use chrono::{Local, TimeZone};

    #[test]
    fn empty_stream_has_no_report() {
        assert!(Core::build_report(&Stream::default(), LabelMode::App, 30).is_none());
    }

    #[test]
    fn modes_change_granularity() {
        let mut snap = Snapshot::new(Local.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap());
        snap.windows = vec![Window::new(1, "a.txt - Vim"), Window::new(2, "b.txt - Vim")];
        snap.active = 1;
        snap.visible = vec![1, 2];
        let stream = Stream::new(vec![snap]).unwrap();

        let by_app = Core::build_report(&stream, LabelMode::App, 30).unwrap();
        assert_eq!(by_app.timeline.visible.len(), 1);
        assert_eq!(by_app.agg.all.count("Vim"), 2);
        assert_eq!(by_app.agg.active.x_label, "App");

        let by_window = Core::build_report(&stream, LabelMode::Window, 30).unwrap();
        assert_eq!(by_window.timeline.visible.len(), 2);
        assert_eq!(by_window.agg.all.count("a.txt - Vim"), 1);
        assert_eq!(by_window.snapshots, 1);
    }
}
