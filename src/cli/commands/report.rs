use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::RunStats;
use crate::core::report::{ReportLogic, ReportOutcome};
use crate::db::log::log_run;
use crate::errors::{AppError, AppResult};
use crate::export::{
    CsvSink, ExportFormat, JsonSink, SqliteSink, SummarySink, XlsxSink, ensure_writable,
    get_headers, summary_to_row,
};
use crate::models::day_summary::DailySummary;
use crate::source::{CsvSource, EventSource, SqliteSource};
use crate::ui::messages::{header, info, warning};
use crate::utils::table::Table;
use std::path::Path;

/// Handle the `report` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Report {
        input,
        format,
        file,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let mut source = build_source(input.as_deref(), cfg)?;
    let mut sink = build_sink(*format, file.as_deref(), *force, cfg)?;
    let target = describe_target(*format, file.as_deref(), cfg);

    let outcome = ReportLogic::run(source.as_mut(), sink.as_mut(), &cfg.normalizer_settings());

    match outcome {
        Ok(ReportOutcome::Published(report)) => {
            log_run(
                &cfg.database,
                "report",
                &target,
                &format!(
                    "{} summaries for {} users ({} sessions)",
                    report.stats.days, report.stats.users, report.stats.sessions
                ),
            );
            print_stats(&report.stats);
            print_preview(&report.summaries, cfg.preview_rows);
            Ok(())
        }
        Ok(ReportOutcome::NoData(stats)) => {
            log_run(
                &cfg.database,
                "no_data",
                &target,
                &format!("{} records, no complete session", stats.records),
            );
            print_stats(&stats);
            warning("No data to export.");
            Ok(())
        }
        Err(AppError::SinkUnavailable { reason, summaries }) => {
            log_run(&cfg.database, "report_failed", &target, &reason);
            // the report itself was computed: show it before failing
            print_preview(&summaries, cfg.preview_rows);
            Err(AppError::SinkUnavailable { reason, summaries })
        }
        Err(e) => {
            log_run(&cfg.database, "report_failed", &target, &e.to_string());
            Err(e)
        }
    }
}

fn build_source(input: Option<&str>, cfg: &Config) -> AppResult<Box<dyn EventSource>> {
    let source: Box<dyn EventSource> = match input {
        Some(path) => {
            info(format!("Reading badge events from {path}"));
            Box::new(CsvSource::new(path))
        }
        None => {
            info(format!(
                "Reading badge events from table '{}' in {}",
                cfg.input_table, cfg.database
            ));
            if !Path::new(&cfg.database).exists() {
                return Err(AppError::SourceUnavailable(format!(
                    "database {} not found (run `infloor init` and `infloor import` first)",
                    cfg.database
                )));
            }
            Box::new(SqliteSource::new(&cfg.database, &cfg.input_table)?)
        }
    };
    Ok(source)
}

fn build_sink(
    format: ExportFormat,
    file: Option<&str>,
    force: bool,
    cfg: &Config,
) -> AppResult<Box<dyn SummarySink>> {
    let sink: Box<dyn SummarySink> = match format {
        ExportFormat::Db => {
            if file.is_some() {
                warning("--file is ignored with --format db");
            }
            Box::new(SqliteSink::new(&cfg.database, &cfg.output_table)?)
        }
        ExportFormat::Csv => Box::new(CsvSink::new(output_path(format, file, force)?)),
        ExportFormat::Json => Box::new(JsonSink::new(output_path(format, file, force)?)),
        ExportFormat::Xlsx => Box::new(XlsxSink::new(
            output_path(format, file, force)?,
            &cfg.output_table,
        )),
    };
    Ok(sink)
}

/// File-based formats need `--file`, and an existing file needs `--force`
/// or an explicit confirmation.
fn output_path<'a>(format: ExportFormat, file: Option<&'a str>, force: bool) -> AppResult<&'a Path> {
    let file = file.ok_or_else(|| {
        AppError::Config(format!("--file is required with --format {}", format.as_str()))
    })?;
    let path = Path::new(file);
    ensure_writable(path, force)?;
    Ok(path)
}

fn describe_target(format: ExportFormat, file: Option<&str>, cfg: &Config) -> String {
    match (format, file) {
        (ExportFormat::Db, _) => cfg.output_table.clone(),
        (_, Some(f)) => f.to_string(),
        (_, None) => format.as_str().to_string(),
    }
}

fn print_stats(stats: &RunStats) {
    info(format!(
        "{} records, {} events, {} sessions, {} daily summaries",
        stats.records, stats.events, stats.sessions, stats.days
    ));
    if stats.unclassified > 0 {
        info(format!(
            "{} records ignored (device is neither entrance nor exit)",
            stats.unclassified
        ));
    }
    if stats.dangling_entrances > 0 {
        warning(format!(
            "{} entrances had no following exit and were dropped",
            stats.dangling_entrances
        ));
    }
}

fn print_preview(summaries: &[DailySummary], rows: usize) {
    if summaries.is_empty() || rows == 0 {
        return;
    }

    header(format!(
        "First {} of {} summaries",
        rows.min(summaries.len()),
        summaries.len()
    ));

    let mut table = Table::new(get_headers());
    for s in summaries.iter().take(rows) {
        table.add_row(summary_to_row(s));
    }
    print!("{}", table.render());
}
