use crate::db::db_utils::quote_ident;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the internal `log` table if missing.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the raw badge table if missing. Columns mirror the export headers.
pub fn ensure_raw_table(conn: &Connection, table: &str) -> AppResult<()> {
    conn.execute_batch(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {t} (
            "User"   TEXT NOT NULL,
            "Device" TEXT NOT NULL,
            "Date"   TEXT NOT NULL
        );
        "#,
        t = quote_ident(table)?
    ))?;
    Ok(())
}

/// Initialize the store: internal log plus the raw input table.
pub fn init_db(conn: &Connection, input_table: &str) -> AppResult<()> {
    ensure_log_table(conn)?;
    ensure_raw_table(conn, input_table)?;
    Ok(())
}

/// Used by the run log so it never depends on `init` having been called.
pub(crate) fn ensure_log(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)
}
