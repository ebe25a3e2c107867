// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
mod model;
mod sqlite;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use json_csv::{CsvSink, JsonSink};
pub use model::{SummaryExport, get_headers, summary_to_row};
pub use sqlite::SqliteSink;
pub use xlsx::XlsxSink;

use crate::errors::AppResult;
use crate::models::day_summary::DailySummary;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Destination of the ordered daily summaries.
pub trait SummarySink {
    fn write_summaries(&mut self, summaries: &[DailySummary]) -> AppResult<()>;
}

/// Keeps the last published report in memory.
impl SummarySink for Vec<DailySummary> {
    fn write_summaries(&mut self, summaries: &[DailySummary]) -> AppResult<()> {
        self.clear();
        self.extend_from_slice(summaries);
        Ok(())
    }
}

/// Shared completion message for file-based sinks.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} report written: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Output table inside the SQLite store
    Db,
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Db => "db",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}
