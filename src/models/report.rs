use crate::core::calculator::aggregate::AggTime;
use crate::core::calculator::timeline::Timeline;
use crate::core::labels::LabelMode;
use serde::Serialize;

/// Everything a renderer needs for one stream at one label granularity.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub mode: LabelMode,
    pub snapshots: usize,
    pub timeline: Timeline,
    pub agg: AggTime,
}
