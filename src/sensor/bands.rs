use serde::{Deserialize, Serialize};

use crate::status::SensorStatus;

/// Boundaries of the five bands shared by every sensor kind.
///
/// `[normal_min, normal_max]` is Normal, `[warning_min, normal_min)` and
/// `(normal_max, warning_max]` are Warning, everything further out is Critical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorBands {
    pub warning_min: f64,
    pub normal_min: f64,
    pub normal_max: f64,
    pub warning_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    CriticalLow,
    WarningLow,
    Normal,
    WarningHigh,
    CriticalHigh,
}

impl SensorBands {
    pub fn band_for(&self, value: f64) -> Band {
        if value >= self.normal_min && value <= self.normal_max {
            Band::Normal
        } else if value >= self.warning_min && value < self.normal_min {
            Band::WarningLow
        } else if value > self.normal_max && value <= self.warning_max {
            Band::WarningHigh
        } else if value < self.warning_min {
            Band::CriticalLow
        } else {
            Band::CriticalHigh
        }
    }
}

impl Band {
    pub fn status(&self) -> SensorStatus {
        match self {
            Band::Normal => SensorStatus::Normal,
            Band::WarningLow | Band::WarningHigh => SensorStatus::Warning,
            Band::CriticalLow | Band::CriticalHigh => SensorStatus::Critical,
        }
    }

    /// Whether the value sits below the normal range.
    pub fn is_low(&self) -> bool {
        matches!(self, Band::CriticalLow | Band::WarningLow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::SensorKind;

    #[test]
    fn test_ph_band_edges() {
        let bands = SensorKind::Ph.bands();
        assert_eq!(bands.band_for(5.4999), Band::CriticalLow);
        assert_eq!(bands.band_for(5.5), Band::WarningLow);
        assert_eq!(bands.band_for(5.9999), Band::WarningLow);
        assert_eq!(bands.band_for(6.0), Band::Normal);
        assert_eq!(bands.band_for(7.5), Band::Normal);
        assert_eq!(bands.band_for(7.5001), Band::WarningHigh);
        assert_eq!(bands.band_for(8.0), Band::WarningHigh);
        assert_eq!(bands.band_for(8.0001), Band::CriticalHigh);
    }

    #[test]
    fn test_extreme_values_are_critical() {
        let bands = SensorKind::Moisture.bands();
        assert_eq!(bands.band_for(-10.0), Band::CriticalLow);
        assert_eq!(bands.band_for(150.0), Band::CriticalHigh);
        assert!(Band::CriticalLow.is_low());
        assert!(!Band::CriticalHigh.is_low());
    }
}
