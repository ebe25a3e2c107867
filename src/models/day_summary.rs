use chrono::{NaiveDate, NaiveTime, TimeDelta};

/// Attendance figures for one user on one calendar day.
///
/// `total_duration` is the span from first entrance to last exit,
/// `in_floor_duration` the sum of the session lengths, and
/// `break_duration` whatever is left of the span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub user: String,
    pub day: NaiveDate,
    pub login_time: NaiveTime,
    pub logout_time: NaiveTime,
    pub total_duration: TimeDelta,
    pub in_floor_duration: TimeDelta,
    pub break_duration: TimeDelta,
}
