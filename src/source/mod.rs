//! Where raw badge rows come from.

mod csv_file;
mod sqlite_table;

pub use csv_file::CsvSource;
pub use sqlite_table::SqliteSource;

use crate::errors::AppResult;
use crate::models::raw_record::RawRecord;

/// Anything able to hand over the full set of raw badge rows for a run.
pub trait EventSource {
    fn read_records(&mut self) -> AppResult<Vec<RawRecord>>;
}

/// In-memory rows, mostly useful for tests and embedding.
impl EventSource for Vec<RawRecord> {
    fn read_records(&mut self) -> AppResult<Vec<RawRecord>> {
        Ok(self.clone())
    }
}
