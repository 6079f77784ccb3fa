mod all;
mod as_str;
mod bands;
mod display_name;
mod id_prefix;
mod optimal_range;
mod trait_display;
mod unit;

use serde::{Deserialize, Serialize};

/// The three soil sensors on an IoTani field node.
///
/// Serialized with the names the dashboard and telemetry payloads use
/// (`"pH"`, `"moisture"`, `"temperature"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    #[serde(rename = "pH")]
    Ph,
    #[serde(rename = "moisture")]
    Moisture,
    #[serde(rename = "temperature")]
    Temperature,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_evaluation_order() {
        assert_eq!(
            SensorKind::all(),
            [SensorKind::Ph, SensorKind::Moisture, SensorKind::Temperature]
        );
    }

    #[test]
    fn test_units_and_prefixes() {
        assert_eq!(SensorKind::Ph.unit(), "");
        assert_eq!(SensorKind::Moisture.unit(), "%");
        assert_eq!(SensorKind::Temperature.unit(), "°C");

        assert_eq!(SensorKind::Ph.id_prefix(), "ph");
        assert_eq!(SensorKind::Moisture.id_prefix(), "moisture");
        assert_eq!(SensorKind::Temperature.id_prefix(), "temperature");
    }

    #[test]
    fn test_optimal_range_text() {
        assert_eq!(SensorKind::Ph.optimal_range(), "6.0 - 7.5");
        assert_eq!(SensorKind::Moisture.optimal_range(), "50% - 80%");
        assert_eq!(SensorKind::Temperature.optimal_range(), "20°C - 30°C");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&SensorKind::Ph).unwrap(), "\"pH\"");
        let kind: SensorKind = serde_json::from_str("\"temperature\"").unwrap();
        assert_eq!(kind, SensorKind::Temperature);
        assert_eq!(SensorKind::Moisture.to_string(), "moisture");
    }
}
