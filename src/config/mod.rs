mod load;
mod validate;
mod validation_error;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::bus::TELEMETRY_TOPIC;
use crate::telemetry::DEFAULT_HISTORY_CAPACITY;

pub use validation_error::ValidationError;

/// Runtime settings for the monitor, read from `config.yml`.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub device_id: String,
    pub bus_topic: String,
    /// Seconds between mock telemetry points.
    pub sample_interval_secs: u64,
    /// Days of generated history shown before live data arrives.
    pub history_days: usize,
    /// Points kept in the rolling chart buffer.
    pub history_capacity: usize,
    /// Label used in export titles and file names, e.g. `harian`.
    pub data_type: String,
    pub log_dir: PathBuf,
    pub export_dir: PathBuf,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            device_id: "iotani-01".to_string(),
            bus_topic: TELEMETRY_TOPIC.to_string(),
            sample_interval_secs: 5,
            history_days: 50,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            data_type: "harian".to_string(),
            log_dir: PathBuf::from("./logs"),
            export_dir: PathBuf::from("./exports"),
        }
    }
}

impl MonitorConfig {
    pub fn sample_interval(&self) -> Duration {
        Duration::from_secs(self.sample_interval_secs)
    }
}
