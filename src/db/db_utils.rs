use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// Validate a table name coming from config/CLI and return it quoted.
///
/// Only `[A-Za-z_][A-Za-z0-9_]*` is accepted: the name ends up inside SQL
/// text, where it cannot be bound as a parameter.
pub fn quote_ident(name: &str) -> AppResult<String> {
    let mut chars = name.chars();
    let valid_head = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_tail = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid_head && valid_tail {
        Ok(format!("\"{name}\""))
    } else {
        Err(AppError::InvalidIdentifier(name.to_string()))
    }
}

/// Check if a table exists.
pub fn table_exists(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Number of rows in a table (0 if the table does not exist).
pub fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    if !table_exists(conn, table)? {
        return Ok(0);
    }
    let sql = format!("SELECT COUNT(*) FROM {}", quote_ident(table)?);
    Ok(conn.query_row(&sql, [], |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_accepts_plain_names() {
        assert_eq!(quote_ident("Raw").unwrap(), "\"Raw\"");
        assert_eq!(quote_ident("InFloor_Summary").unwrap(), "\"InFloor_Summary\"");
        assert_eq!(quote_ident("_t1").unwrap(), "\"_t1\"");
    }

    #[test]
    fn quote_ident_rejects_anything_else() {
        for bad in ["", "1abc", "raw data", "x\"; DROP TABLE log; --", "Summary-2025"] {
            assert!(
                matches!(quote_ident(bad), Err(AppError::InvalidIdentifier(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn count_rows_on_missing_table_is_zero() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(count_rows(&conn, "Raw").unwrap(), 0);
    }
}
