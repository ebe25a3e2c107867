// src/export/model.rs

use crate::models::day_summary::DailySummary;
use crate::utils::time::{format_date, format_duration, format_time};
use serde::Serialize;

/// Flat, text-only shape of a summary row for CSV / JSON / preview.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SummaryExport {
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Login Time")]
    pub login_time: String,
    #[serde(rename = "Logout Time")]
    pub logout_time: String,
    #[serde(rename = "Total Duration")]
    pub total_duration: String,
    #[serde(rename = "In-Floor Time")]
    pub in_floor_time: String,
    #[serde(rename = "Break Time")]
    pub break_time: String,
}

impl From<&DailySummary> for SummaryExport {
    fn from(s: &DailySummary) -> Self {
        Self {
            user: s.user.clone(),
            date: format_date(s.day),
            login_time: format_time(s.login_time),
            logout_time: format_time(s.logout_time),
            total_duration: format_duration(s.total_duration),
            in_floor_time: format_duration(s.in_floor_duration),
            break_time: format_duration(s.break_duration),
        }
    }
}

/// Column headers for XLSX and the preview table, in column order.
pub fn get_headers() -> [&'static str; 7] {
    [
        "User",
        "Date",
        "Login Time",
        "Logout Time",
        "Total Duration",
        "In-Floor Time",
        "Break Time",
    ]
}

pub fn summary_to_row(s: &DailySummary) -> Vec<String> {
    let e = SummaryExport::from(s);
    vec![
        e.user,
        e.date,
        e.login_time,
        e.logout_time,
        e.total_duration,
        e.in_floor_time,
        e.break_time,
    ]
}
