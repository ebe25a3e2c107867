use crate::core::logic::{Core, Report, RunStats};
use crate::core::normalizer::NormalizerSettings;
use crate::errors::{AppError, AppResult};
use crate::export::SummarySink;
use crate::source::EventSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Summaries were computed and handed to the sink.
    Published(Report),
    /// Nothing survived reconstruction; the sink was left untouched.
    NoData(RunStats),
}

/// Wires a source, the pipeline and a sink together for one run.
pub struct ReportLogic;

impl ReportLogic {
    /// Read every record, build the report and publish it.
    ///
    /// - read failures are `SourceUnavailable`
    /// - a bad timestamp rejects the whole batch
    /// - zero summaries is `ReportOutcome::NoData`, not an error
    /// - a sink failure is `SinkUnavailable` and carries the summaries
    pub fn run<S, K>(
        source: &mut S,
        sink: &mut K,
        settings: &NormalizerSettings,
    ) -> AppResult<ReportOutcome>
    where
        S: EventSource + ?Sized,
        K: SummarySink + ?Sized,
    {
        let report = {
            let records = source.read_records()?;
            Core::build_report(&records, settings)?
        };

        if report.summaries.is_empty() {
            tracing::info!(records = report.stats.records, "no sessions found, nothing to publish");
            return Ok(ReportOutcome::NoData(report.stats));
        }

        match sink.write_summaries(&report.summaries) {
            Ok(()) => Ok(ReportOutcome::Published(report)),
            Err(e) => {
                tracing::error!(error = %e, "writing summaries failed");
                Err(AppError::SinkUnavailable {
                    reason: e.to_string(),
                    summaries: report.summaries,
                })
            }
        }
    }
}
