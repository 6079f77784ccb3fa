use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::Result;
use crate::telemetry::SensorDataPoint;

#[derive(Debug, Deserialize)]
struct TelemetryPayload {
    #[serde(alias = "pH")]
    ph: f64,
    #[serde(alias = "kelembapan")]
    moisture: f64,
    #[serde(alias = "suhu")]
    temperature: f64,
    #[serde(default)]
    date: Option<String>,
}

/// Parses a telemetry payload into a data point.
///
/// Accepts the direct form `{"ph":6.8,"moisture":65,"temperature":27}` and
/// the wrapped form `{"d":{...}}`. Points without a `date` are labelled with
/// the time they were received.
pub fn parse_telemetry_payload(payload: &str, received_at: NaiveDateTime) -> Result<SensorDataPoint> {
    let data: serde_json::Value = serde_json::from_str(payload)?;
    let wrapped = data.get("d").filter(|d| d.is_object()).cloned();
    let data = wrapped.unwrap_or(data);

    let parsed: TelemetryPayload = serde_json::from_value(data)?;
    let point = SensorDataPoint {
        date: parsed
            .date
            .unwrap_or_else(|| received_at.format("%H:%M:%S").to_string()),
        temperature: parsed.temperature,
        moisture: parsed.moisture,
        ph: parsed.ph,
    };

    // rejects non-finite values
    point.snapshot()?;
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn received_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 17)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_direct_payload() {
        let point = parse_telemetry_payload(
            r#"{"ph":6.8,"moisture":65,"temperature":27}"#,
            received_at(),
        )
        .unwrap();
        assert_eq!(point.ph, 6.8);
        assert_eq!(point.moisture, 65.0);
        assert_eq!(point.temperature, 27.0);
        assert_eq!(point.date, "08:30:00");
    }

    #[test]
    fn test_wrapped_payload_with_dashboard_keys() {
        let point = parse_telemetry_payload(
            r#"{"i":"iotani-01","d":{"pH":5.2,"kelembapan":41.5,"suhu":31,"date":"17 Mei 2025"}}"#,
            received_at(),
        )
        .unwrap();
        assert_eq!(point.ph, 5.2);
        assert_eq!(point.moisture, 41.5);
        assert_eq!(point.temperature, 31.0);
        assert_eq!(point.date, "17 Mei 2025");
    }

    #[test]
    fn test_rejects_incomplete_or_garbage() {
        assert!(parse_telemetry_payload(r#"{"ph":6.8}"#, received_at()).is_err());
        assert!(parse_telemetry_payload("not json", received_at()).is_err());
        assert!(parse_telemetry_payload(r#"{"ph":"6.8","moisture":1,"temperature":2}"#, received_at()).is_err());
    }
}
