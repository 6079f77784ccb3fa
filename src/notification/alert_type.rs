use serde::{Deserialize, Serialize};

use crate::status::SensorStatus;

/// Non-normal status tier. Ordered so Critical sorts above Warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Warning,
    Critical,
}

impl AlertType {
    /// `None` for a Normal status.
    pub fn from_status(status: SensorStatus) -> Option<Self> {
        match status {
            SensorStatus::Normal => None,
            SensorStatus::Warning => Some(AlertType::Warning),
            SensorStatus::Critical => Some(AlertType::Critical),
        }
    }

    pub fn status(&self) -> SensorStatus {
        match self {
            AlertType::Warning => SensorStatus::Warning,
            AlertType::Critical => SensorStatus::Critical,
        }
    }
}
