use crate::db::initialize::ensure_log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;
use std::path::Path;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Best-effort run log for an existing store.
///
/// Nothing is created when the database file is missing, and a failure only
/// prints a warning: the log never decides the outcome of a command.
pub fn log_run(database: &str, operation: &str, target: &str, message: &str) {
    if !Path::new(database).exists() {
        return;
    }

    let result = Connection::open(database)
        .map_err(AppError::from)
        .and_then(|conn| {
            ensure_log(&conn)?;
            ttlog(&conn, operation, target, message)
        });

    if let Err(e) = result {
        tracing::debug!(error = %e, operation, "run log not written");
        warning(format!("Failed to write internal log: {e}"));
    }
}
