mod as_str;
mod label;
mod severity;
mod worst_of;

use serde::{Deserialize, Serialize};

/// Health tier of a reading. Ordered so that `max` picks the least healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Normal,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Result of classifying a single reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusClassification {
    pub status: SensorStatus,
    pub message: String,
    pub severity: Severity,
}

impl StatusClassification {
    pub fn new(status: SensorStatus, message: String) -> Self {
        Self {
            status,
            message,
            severity: status.severity(),
        }
    }
}
