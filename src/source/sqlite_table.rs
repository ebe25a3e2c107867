use crate::db::db_utils::{quote_ident, table_exists};
use crate::errors::{AppError, AppResult};
use crate::models::raw_record::RawRecord;
use crate::source::EventSource;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Row};
use std::path::PathBuf;

/// Reads raw rows from the input table of the SQLite store.
///
/// The connection only lives for the duration of [`EventSource::read_records`].
#[derive(Debug, Clone)]
pub struct SqliteSource {
    path: PathBuf,
    table: String,
}

impl SqliteSource {
    pub fn new(path: impl Into<PathBuf>, table: &str) -> AppResult<Self> {
        quote_ident(table)?;
        Ok(Self {
            path: path.into(),
            table: table.to_string(),
        })
    }
}

impl EventSource for SqliteSource {
    fn read_records(&mut self) -> AppResult<Vec<RawRecord>> {
        let unavailable = |e: rusqlite::Error| {
            AppError::SourceUnavailable(format!("{} ({}): {e}", self.path.display(), self.table))
        };

        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(unavailable)?;

        if !table_exists(&conn, &self.table).map_err(unavailable)? {
            return Err(AppError::SourceUnavailable(format!(
                "table '{}' not found in {}",
                self.table,
                self.path.display()
            )));
        }

        let sql = format!(
            "SELECT \"User\", \"Device\", \"Date\" FROM {} ORDER BY rowid ASC",
            quote_ident(&self.table)?
        );

        let mut stmt = conn.prepare(&sql).map_err(unavailable)?;
        let rows = stmt.query_map([], map_row).map_err(unavailable)?;

        let mut records = Vec::new();
        for r in rows {
            records.push(r.map_err(unavailable)?);
        }

        Ok(records)
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<RawRecord> {
    Ok(RawRecord {
        user: text_column(row, 0)?,
        device: text_column(row, 1)?,
        date: text_column(row, 2)?,
    })
}

/// Spreadsheet imports leave numbers in text columns (badge ids, mostly).
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) | ValueRef::Blob(t) => String::from_utf8_lossy(t).into_owned(),
    })
}
