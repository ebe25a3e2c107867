// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::SummaryExport;
use crate::export::{SummarySink, notify_export_success};
use crate::models::day_summary::DailySummary;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

fn to_rows(summaries: &[DailySummary]) -> Vec<SummaryExport> {
    summaries.iter().map(SummaryExport::from).collect()
}

/// Pretty-printed JSON array of summary rows.
#[derive(Debug, Clone)]
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SummarySink for JsonSink {
    fn write_summaries(&mut self, summaries: &[DailySummary]) -> AppResult<()> {
        export_json(summaries, &self.path)
    }
}

fn export_json(summaries: &[DailySummary], path: &Path) -> AppResult<()> {
    info(format!("Writing JSON report: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&to_rows(summaries))
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.flush()?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with a header row (header comes from serde field names).
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SummarySink for CsvSink {
    fn write_summaries(&mut self, summaries: &[DailySummary]) -> AppResult<()> {
        export_csv(summaries, &self.path)
    }
}

fn export_csv(summaries: &[DailySummary], path: &Path) -> AppResult<()> {
    info(format!("Writing CSV report: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in to_rows(summaries) {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
