//! Loading raw badge rows into the store's input table.

use crate::db::db_utils::quote_ident;
use crate::db::initialize::ensure_raw_table;
use crate::errors::AppResult;
use crate::models::raw_record::RawRecord;
use rusqlite::{Connection, params};

/// Insert `records` into `table` inside one transaction.
///
/// With `replace` the previous content of the table is discarded first.
/// Returns the number of inserted rows.
pub fn insert_raw_records(
    conn: &mut Connection,
    table: &str,
    records: &[RawRecord],
    replace: bool,
) -> AppResult<usize> {
    let quoted = quote_ident(table)?;
    ensure_raw_table(conn, table)?;

    let tx = conn.transaction()?;

    if replace {
        tx.execute(&format!("DELETE FROM {quoted}"), [])?;
    }

    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO {quoted} (\"User\", \"Device\", \"Date\") VALUES (?1, ?2, ?3)"
        ))?;
        for rec in records {
            stmt.execute(params![rec.user, rec.device, rec.date])?;
        }
    }

    tx.commit()?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::db_utils::count_rows;

    fn sample() -> Vec<RawRecord> {
        vec![
            RawRecord::new("alice", "Main ENTRANCE Door", "14-03-2025 09:00"),
            RawRecord::new("alice", "Main EXIT Door", "14-03-2025 17:00"),
        ]
    }

    #[test]
    fn appends_by_default_and_replaces_on_request() {
        let mut conn = Connection::open_in_memory().unwrap();

        insert_raw_records(&mut conn, "Raw", &sample(), false).unwrap();
        insert_raw_records(&mut conn, "Raw", &sample(), false).unwrap();
        assert_eq!(count_rows(&conn, "Raw").unwrap(), 4);

        insert_raw_records(&mut conn, "Raw", &sample(), true).unwrap();
        assert_eq!(count_rows(&conn, "Raw").unwrap(), 2);
    }
}
