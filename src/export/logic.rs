// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{agg_to_rows, timeline_to_rows};
use crate::export::{ExportFormat, ExportWhat};
use crate::models::report::Report;
use log::debug;
use serde::Serialize;
use std::path::Path;

/// High level export of a report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write either the timeline ranges or the ranked bars of `report`.
    ///
    /// - `format`: csv | json
    /// - `what`: timeline | stats
    /// - `max_bars`: ceiling for each ranked chart
    pub fn export(
        report: &Report,
        format: ExportFormat,
        what: ExportWhat,
        path: &Path,
        max_bars: usize,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        match what {
            ExportWhat::Timeline => write_rows(&timeline_to_rows(&report.timeline), format, path),
            ExportWhat::Stats => write_rows(&agg_to_rows(&report.agg, max_bars), format, path),
        }
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    debug!("writing {} rows as {}", rows.len(), format.as_str());
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}
