// src/export/model.rs

use crate::core::calculator::aggregate::AggTime;
use crate::core::calculator::timeline::Timeline;
use serde::Serialize;

/// Flat row for exporting a timeline range.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RangeExport {
    pub track: String,
    pub label: String,
    pub start: String,
    pub end: String,
    pub duration_secs: i64,
}

/// Flat row for exporting a ranked bar.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BarExport {
    pub track: String,
    pub rank: usize,
    pub label: String,
    pub count: u64,
}

pub(crate) fn timeline_to_rows(timeline: &Timeline) -> Vec<RangeExport> {
    timeline
        .rows()
        .flat_map(|(track, ranges)| {
            ranges.iter().map(move |r| RangeExport {
                track: track.as_str().to_string(),
                label: r.label.clone(),
                start: r.start.to_rfc3339(),
                end: r.end.to_rfc3339(),
                duration_secs: r.duration().num_seconds(),
            })
        })
        .collect()
}

pub(crate) fn agg_to_rows(agg: &AggTime, max_bars: usize) -> Vec<BarExport> {
    agg.charts()
        .flat_map(|(track, chart)| {
            chart
                .top_n(max_bars)
                .into_iter()
                .enumerate()
                .map(move |(i, bar)| BarExport {
                    track: track.as_str().to_string(),
                    rank: i + 1,
                    label: bar.label,
                    count: bar.count,
                })
        })
        .collect()
}
