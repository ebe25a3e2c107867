use super::action::Action;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A classified badge event for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub user: String,
    pub timestamp: NaiveDateTime,
    pub action: Action,
}

impl Event {
    pub fn new(user: impl Into<String>, timestamp: NaiveDateTime, action: Action) -> Self {
        Self {
            user: user.into(),
            timestamp,
            action,
        }
    }
}
