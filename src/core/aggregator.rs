//! Folds sessions into one attendance summary per user and day.

use crate::core::reconstructor::SessionsByUser;
use crate::models::{day_summary::DailySummary, session::Session};
use chrono::{NaiveDate, TimeDelta};
use std::collections::BTreeMap;

/// Build the daily summaries, ordered by user and then by day.
pub fn aggregate(sessions: &SessionsByUser) -> Vec<DailySummary> {
    let mut out = Vec::new();

    for (user, user_sessions) in sessions {
        let mut by_day: BTreeMap<NaiveDate, Vec<&Session>> = BTreeMap::new();
        for s in user_sessions {
            if s.crosses_midnight() {
                tracing::debug!(
                    user = user.as_str(),
                    day = %s.day,
                    "session runs past midnight, kept on entrance day"
                );
            }
            by_day.entry(s.day).or_default().push(s);
        }

        out.extend(
            by_day
                .into_iter()
                .filter_map(|(day, group)| summarize_day(user, day, &group)),
        );
    }

    out
}

/// Summary of one user's sessions on `day`; `None` for an empty group.
pub fn summarize_day(user: &str, day: NaiveDate, sessions: &[&Session]) -> Option<DailySummary> {
    let login = sessions.iter().map(|s| s.entry).min()?;
    let logout = sessions.iter().map(|s| s.exit).max()?;

    // span on full timestamps, so an exit after midnight still counts forward
    let total = logout - login;
    let in_floor = sessions
        .iter()
        .map(|s| s.duration())
        .fold(TimeDelta::zero(), |acc, d| acc + d);

    Some(DailySummary {
        user: user.to_string(),
        day,
        login_time: login.time(),
        logout_time: logout.time(),
        total_duration: total,
        in_floor_duration: in_floor,
        break_duration: total - in_floor,
    })
}
