use crate::classifier::classify;
use crate::status::SensorStatus;

use super::SensorSnapshot;

/// Classifies all three readings and keeps the worst status.
pub fn overall_status(snapshot: &SensorSnapshot) -> SensorStatus {
    SensorStatus::worst_of(snapshot.readings().iter().map(|r| classify(r).status))
}
