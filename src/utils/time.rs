//! Time utilities: rendering times of day and elapsed durations.

use chrono::{NaiveDate, NaiveTime, TimeDelta};

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Elapsed time as `HH:MM:SS`; hours are not wrapped at 24 and negative
/// values keep their sign.
pub fn format_duration(d: TimeDelta) -> String {
    let sign = if d < TimeDelta::zero() { "-" } else { "" };
    let secs = d.num_seconds().abs();
    format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
