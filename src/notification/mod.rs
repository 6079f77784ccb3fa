mod alert_type;
mod derive_notifications;
mod sort_for_display;

use serde::{Deserialize, Serialize};

use crate::sensor::SensorKind;
use crate::status::Severity;

pub use alert_type::AlertType;
pub use derive_notifications::derive_notifications;
pub use sort_for_display::{sort_for_display, sorted_for_display};

/// Display record for a sensor outside its normal range.
///
/// `id` is `"<prefix>-<value>"`; two identical readings of the same sensor
/// share an id. It keys a rendered list and is not unique across time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub sensor: SensorKind,
    pub message: String,
    pub value: f64,
    pub unit: String,
    pub severity: Severity,
}
