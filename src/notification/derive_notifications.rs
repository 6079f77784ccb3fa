use crate::classifier::classify;
use crate::evaluation::SensorSnapshot;
use crate::sensor::format_plain;

use super::{AlertType, Notification};

/// One notification per non-normal reading, in pH, moisture, temperature order.
pub fn derive_notifications(snapshot: &SensorSnapshot) -> Vec<Notification> {
    snapshot
        .readings()
        .iter()
        .filter_map(|reading| {
            let classification = classify(reading);
            let alert_type = AlertType::from_status(classification.status)?;
            let kind = reading.kind();

            Some(Notification {
                id: format!("{}-{}", kind.id_prefix(), format_plain(reading.value())),
                alert_type,
                sensor: kind,
                message: classification.message,
                value: reading.value(),
                unit: kind.unit().to_string(),
                severity: classification.severity,
            })
        })
        .collect()
}
