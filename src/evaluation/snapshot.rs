use serde::Serialize;

use crate::error::Result;
use crate::sensor::SensorReading;

/// The three readings of one field node taken at the same moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorSnapshot {
    pub ph: SensorReading,
    pub moisture: SensorReading,
    pub temperature: SensorReading,
}

impl SensorSnapshot {
    pub fn new(ph: f64, moisture: f64, temperature: f64) -> Result<Self> {
        Ok(Self {
            ph: SensorReading::ph(ph)?,
            moisture: SensorReading::moisture(moisture)?,
            temperature: SensorReading::temperature(temperature)?,
        })
    }

    /// Readings in evaluation order.
    pub fn readings(&self) -> [SensorReading; 3] {
        [self.ph, self.moisture, self.temperature]
    }
}
