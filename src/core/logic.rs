use crate::core::normalizer::{self, NormalizerSettings};
use crate::core::{aggregator, reconstructor};
use crate::errors::AppResult;
use crate::models::{day_summary::DailySummary, raw_record::RawRecord};
use serde::Serialize;

/// Counters collected while running the pipeline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub records: usize,
    pub events: usize,
    pub unclassified: usize,
    pub sessions: usize,
    pub dangling_entrances: usize,
    pub orphan_exits: usize,
    pub users: usize,
    pub days: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub summaries: Vec<DailySummary>,
    pub stats: RunStats,
}

pub struct Core;

impl Core {
    /// Normalizer → reconstructor → aggregator, entirely in memory.
    pub fn build_report(records: &[RawRecord], settings: &NormalizerSettings) -> AppResult<Report> {
        let batch = normalizer::normalize(records, settings)?;
        let sessions = reconstructor::reconstruct_all(&batch.events);
        let summaries = aggregator::aggregate(&sessions.by_user);

        let stats = RunStats {
            records: records.len(),
            events: batch.events.len(),
            unclassified: batch.unclassified,
            sessions: sessions.session_count(),
            dangling_entrances: sessions.dangling_entrances,
            orphan_exits: sessions.orphan_exits,
            users: sessions.by_user.len(),
            days: summaries.len(),
        };

        tracing::debug!(?stats, "report built");

        Ok(Report { summaries, stats })
    }
}
