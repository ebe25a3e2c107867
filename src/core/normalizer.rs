//! Turns raw badge rows into time-ordered, classified events.

use crate::errors::{AppError, AppResult};
use crate::models::{action::Action, event::Event, raw_record::RawRecord};
use chrono::NaiveDateTime;

/// Timestamp layout of the access-control export: `DD-MM-YYYY HH:MM`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";
pub const DEFAULT_ENTRANCE_KEYWORD: &str = "ENTRANCE";
pub const DEFAULT_EXIT_KEYWORD: &str = "EXIT";

/// Maps a device name to an action by keyword, ignoring letter case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    entrance: String,
    exit: String,
}

impl Classifier {
    pub fn new(entrance_keyword: &str, exit_keyword: &str) -> Self {
        Self {
            entrance: entrance_keyword.to_uppercase(),
            exit: exit_keyword.to_uppercase(),
        }
    }

    /// Entrance wins when a device name carries both keywords.
    pub fn classify(&self, device: &str) -> Option<Action> {
        let device = device.to_uppercase();

        if device.contains(&self.entrance) {
            Some(Action::Entrance)
        } else if device.contains(&self.exit) {
            Some(Action::Exit)
        } else {
            None
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRANCE_KEYWORD, DEFAULT_EXIT_KEYWORD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerSettings {
    pub timestamp_format: String,
    pub classifier: Classifier,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            classifier: Classifier::default(),
        }
    }
}

/// Output of [`normalize`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NormalizedBatch {
    pub events: Vec<Event>,
    /// Rows whose device matched neither keyword.
    pub unclassified: usize,
}

pub fn parse_timestamp(raw: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, format).ok()
}

/// Parse, classify and order a batch of raw rows.
///
/// Every timestamp is parsed before anything is classified, so a single bad
/// `Date` rejects the whole batch even if its device would have been dropped.
pub fn normalize(records: &[RawRecord], settings: &NormalizerSettings) -> AppResult<NormalizedBatch> {
    let mut parsed = Vec::with_capacity(records.len());

    for (idx, rec) in records.iter().enumerate() {
        let ts = parse_timestamp(&rec.date, &settings.timestamp_format).ok_or_else(|| {
            AppError::MalformedTimestamp {
                row: idx + 1,
                value: rec.date.clone(),
                format: settings.timestamp_format.clone(),
            }
        })?;
        parsed.push((rec, ts));
    }

    let mut events = Vec::with_capacity(parsed.len());
    let mut unclassified = 0;

    for (rec, ts) in parsed {
        match settings.classifier.classify(&rec.device) {
            Some(action) => events.push(Event::new(rec.user.clone(), ts, action)),
            None => unclassified += 1,
        }
    }

    // sort_by_key is stable: equal timestamps keep their source order
    events.sort_by_key(|e| e.timestamp);

    tracing::debug!(
        records = records.len(),
        events = events.len(),
        unclassified,
        "normalized badge records"
    );

    Ok(NormalizedBatch {
        events,
        unclassified,
    })
}
