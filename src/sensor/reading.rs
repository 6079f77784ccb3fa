use serde::Serialize;

use crate::error::{IotaniError, Result};

use super::SensorKind;

/// One finite value from one sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorReading {
    kind: SensorKind,
    value: f64,
}

impl SensorReading {
    /// Rejects NaN and infinities; any finite value is accepted, including
    /// values outside the physical range of the sensor.
    pub fn new(kind: SensorKind, value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(IotaniError::NonFiniteReading { kind, value });
        }
        Ok(Self { kind, value })
    }

    pub fn ph(value: f64) -> Result<Self> {
        Self::new(SensorKind::Ph, value)
    }

    pub fn moisture(value: f64) -> Result<Self> {
        Self::new(SensorKind::Moisture, value)
    }

    pub fn temperature(value: f64) -> Result<Self> {
        Self::new(SensorKind::Temperature, value)
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
