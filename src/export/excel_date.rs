// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, TimeDelta, Timelike};

pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";
pub(crate) const TIME_OF_DAY_FORMAT: &str = "hh:mm:ss";
/// Elapsed format: hours keep counting past 24.
pub(crate) const ELAPSED_FORMAT: &str = "[h]:mm:ss";

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Excel serial for a calendar date (1900 date system).
pub(crate) fn date_to_excel_serial(d: NaiveDate) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).expect("valid epoch");
    (d - excel_epoch).num_days() as f64
}

/// Fraction of a day, as Excel stores times of day.
pub(crate) fn time_to_excel_fraction(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / SECONDS_PER_DAY
}

/// Durations are days too, possibly more than one.
pub(crate) fn duration_to_excel_days(d: TimeDelta) -> f64 {
    d.num_seconds() as f64 / SECONDS_PER_DAY
}
