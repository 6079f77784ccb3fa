mod evaluate;
mod overall_status;
mod snapshot;

use serde::Serialize;

use crate::notification::Notification;
use crate::status::{SensorStatus, StatusClassification};

pub use overall_status::overall_status;
pub use snapshot::SensorSnapshot;

/// Everything the dashboard needs from one set of readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorEvaluation {
    pub snapshot: SensorSnapshot,
    pub overall: SensorStatus,
    pub ph: StatusClassification,
    pub moisture: StatusClassification,
    pub temperature: StatusClassification,
    /// Non-normal sensors in evaluation order (pH, moisture, temperature).
    pub notifications: Vec<Notification>,
}
