// src/export/sqlite.rs

use crate::db::db_utils::quote_ident;
use crate::errors::AppResult;
use crate::export::SummarySink;
use crate::models::day_summary::DailySummary;
use crate::ui::messages::{info, success};
use crate::utils::time::{format_date, format_time};
use rusqlite::{Connection, params};
use std::path::PathBuf;

/// Output table next to the raw input in the same SQLite store.
///
/// Every run replaces the table as a whole, inside a single transaction,
/// so readers never see a half-written report.
#[derive(Debug, Clone)]
pub struct SqliteSink {
    path: PathBuf,
    table: String,
}

impl SqliteSink {
    pub fn new(path: impl Into<PathBuf>, table: &str) -> AppResult<Self> {
        quote_ident(table)?;
        Ok(Self {
            path: path.into(),
            table: table.to_string(),
        })
    }
}

impl SummarySink for SqliteSink {
    fn write_summaries(&mut self, summaries: &[DailySummary]) -> AppResult<()> {
        info(format!(
            "Writing table '{}' in {}",
            self.table,
            self.path.display()
        ));

        let mut conn = Connection::open(&self.path)?;
        write_table(&mut conn, &self.table, summaries)?;

        success(format!("{} rows written to '{}'", summaries.len(), self.table));
        Ok(())
    }
}

pub(crate) fn write_table(
    conn: &mut Connection,
    table: &str,
    summaries: &[DailySummary],
) -> AppResult<()> {
    let t = quote_ident(table)?;
    let tx = conn.transaction()?;

    tx.execute_batch(&format!(
        r#"
        DROP TABLE IF EXISTS {t};
        CREATE TABLE {t} (
            "User"             TEXT NOT NULL,
            "Date"             TEXT NOT NULL,
            "Login Time"       TEXT NOT NULL,
            "Logout Time"      TEXT NOT NULL,
            "Total Seconds"    INTEGER NOT NULL,
            "In-Floor Seconds" INTEGER NOT NULL,
            "Break Seconds"    INTEGER NOT NULL,
            PRIMARY KEY ("User", "Date")
        );
        "#
    ))?;

    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO {t} VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
        ))?;

        for s in summaries {
            stmt.execute(params![
                s.user,
                format_date(s.day),
                format_time(s.login_time),
                format_time(s.logout_time),
                s.total_duration.num_seconds(),
                s.in_floor_duration.num_seconds(),
                s.break_duration.num_seconds(),
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}
