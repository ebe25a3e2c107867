use serde::{Deserialize, Serialize};

/// One row as delivered by the badge export, before any parsing.
///
/// Column names follow the access-control export (`User`, `Device`, `Date`);
/// any other column in the source is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Device")]
    pub device: String,
    #[serde(rename = "Date")]
    pub date: String,
}

impl RawRecord {
    pub fn new(user: impl Into<String>, device: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            device: device.into(),
            date: date.into(),
        }
    }
}
