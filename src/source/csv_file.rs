use crate::errors::{AppError, AppResult};
use crate::models::raw_record::RawRecord;
use crate::source::EventSource;
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::PathBuf;

/// Reads raw rows from a CSV export with a `User,Device,Date` header.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventSource for CsvSource {
    fn read_records(&mut self) -> AppResult<Vec<RawRecord>> {
        let file = std::fs::File::open(&self.path).map_err(|e| {
            AppError::SourceUnavailable(format!("cannot open {}: {e}", self.path.display()))
        })?;

        read_csv_records(file).map_err(|e| match e {
            AppError::SourceUnavailable(msg) => {
                AppError::SourceUnavailable(format!("{}: {msg}", self.path.display()))
            }
            other => other,
        })
    }
}

/// Parse CSV rows from any reader. Columns other than the three required
/// ones are ignored; surrounding whitespace is trimmed.
pub(crate) fn read_csv_records<R: Read>(reader: R) -> AppResult<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.deserialize::<RawRecord>() {
        let rec = row.map_err(|e| AppError::SourceUnavailable(format!("CSV read error: {e}")))?;
        records.push(rec);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_required_columns_and_ignores_the_rest() {
        let data = "\
Id,User,Device,Date,Site
1,alice, Main ENTRANCE Door ,14-03-2025 09:00,HQ
2,alice,Main EXIT Door,14-03-2025 17:00,HQ
";
        let recs = read_csv_records(data.as_bytes()).unwrap();

        assert_eq!(
            recs,
            vec![
                RawRecord::new("alice", "Main ENTRANCE Door", "14-03-2025 09:00"),
                RawRecord::new("alice", "Main EXIT Door", "14-03-2025 17:00"),
            ]
        );
    }

    #[test]
    fn missing_column_makes_the_source_unavailable() {
        let data = "User,Date\nalice,14-03-2025 09:00\n";

        let err = read_csv_records(data.as_bytes()).unwrap_err();

        assert!(matches!(err, AppError::SourceUnavailable(_)));
    }

    #[test]
    fn missing_file_makes_the_source_unavailable() {
        let mut src = CsvSource::new("/definitely/not/here/badges.csv");
        assert!(matches!(
            src.read_records(),
            Err(AppError::SourceUnavailable(_))
        ));
    }
}
