use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;

/// One entrance → exit interval of a single user.
///
/// `day` is always the calendar date of `entry`: a session that ends after
/// midnight still belongs to the day it started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Session {
    pub day: NaiveDate,
    pub entry: NaiveDateTime,
    pub exit: NaiveDateTime,
}

impl Session {
    pub fn new(entry: NaiveDateTime, exit: NaiveDateTime) -> Self {
        debug_assert!(entry <= exit, "session exit precedes its entry");
        Self {
            day: entry.date(),
            entry,
            exit,
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.exit - self.entry
    }

    pub fn crosses_midnight(&self) -> bool {
        self.exit.date() != self.day
    }
}
