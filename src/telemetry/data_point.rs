use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::evaluation::SensorSnapshot;
use crate::sensor::SensorKind;

/// One row of sensor history, as charted and exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorDataPoint {
    pub date: String,
    pub temperature: f64,
    pub moisture: f64,
    pub ph: f64,
}

impl SensorDataPoint {
    pub fn value(&self, kind: SensorKind) -> f64 {
        match kind {
            SensorKind::Ph => self.ph,
            SensorKind::Moisture => self.moisture,
            SensorKind::Temperature => self.temperature,
        }
    }

    pub fn snapshot(&self) -> Result<SensorSnapshot> {
        SensorSnapshot::new(self.ph, self.moisture, self.temperature)
    }
}

/// Readings of the most recent point, `Ok(None)` when there is no history yet.
pub fn latest_readings(points: &[SensorDataPoint]) -> Result<Option<SensorSnapshot>> {
    points.last().map(SensorDataPoint::snapshot).transpose()
}
