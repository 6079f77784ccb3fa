//! Threshold classification of single readings.
//!
//! Every finite value falls into exactly one of five bands per sensor kind;
//! the classifier turns that band into a status, a severity and the
//! Indonesian message shown on the dashboard.

mod check_moisture;
mod check_ph;
mod check_temperature;

use crate::sensor::{SensorKind, SensorReading};
use crate::status::StatusClassification;

pub use check_moisture::check_moisture;
pub use check_ph::check_ph;
pub use check_temperature::check_temperature;

pub fn classify(reading: &SensorReading) -> StatusClassification {
    match reading.kind() {
        SensorKind::Ph => check_ph(reading.value()),
        SensorKind::Moisture => check_moisture(reading.value()),
        SensorKind::Temperature => check_temperature(reading.value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{SensorStatus, Severity};

    fn status_of(kind: SensorKind, value: f64) -> SensorStatus {
        classify(&SensorReading::new(kind, value).unwrap()).status
    }

    #[test]
    fn test_ph_bands() {
        use SensorStatus::*;
        for (value, expected) in [
            (5.0, Critical),
            (5.5, Warning),
            (5.9999, Warning),
            (6.0, Normal),
            (6.8, Normal),
            (7.5, Normal),
            (7.6, Warning),
            (8.0, Warning),
            (8.0001, Critical),
            (14.0, Critical),
        ] {
            assert_eq!(status_of(SensorKind::Ph, value), expected, "pH {}", value);
        }
    }

    #[test]
    fn test_moisture_bands() {
        use SensorStatus::*;
        for (value, expected) in [
            (39.9, Critical),
            (40.0, Warning),
            (49.9, Warning),
            (50.0, Normal),
            (80.0, Normal),
            (80.1, Warning),
            (90.0, Warning),
            (90.1, Critical),
        ] {
            assert_eq!(status_of(SensorKind::Moisture, value), expected, "moisture {}", value);
        }
    }

    #[test]
    fn test_temperature_bands() {
        use SensorStatus::*;
        for (value, expected) in [
            (-20.0, Critical),
            (14.9, Critical),
            (15.0, Warning),
            (19.9, Warning),
            (20.0, Normal),
            (30.0, Normal),
            (30.5, Warning),
            (35.0, Warning),
            (35.1, Critical),
        ] {
            assert_eq!(status_of(SensorKind::Temperature, value), expected, "temperature {}", value);
        }
    }

    #[test]
    fn test_classify_is_idempotent() {
        let reading = SensorReading::moisture(42.5).unwrap();
        assert_eq!(classify(&reading), classify(&reading));
    }

    #[test]
    fn test_severity_is_monotonic_for_every_kind() {
        for kind in SensorKind::all() {
            let bands = kind.bands();
            let normal = classify(&SensorReading::new(kind, bands.normal_min).unwrap());
            let warning = classify(&SensorReading::new(kind, bands.warning_max).unwrap());
            let critical = classify(&SensorReading::new(kind, bands.warning_max + 1.0).unwrap());

            assert_eq!(normal.severity, Severity::Low);
            assert!(normal.severity < warning.severity);
            assert!(warning.severity < critical.severity);
        }
    }
}
