use crate::sensor::{format_plain, SensorKind};
use crate::status::{SensorStatus, StatusClassification};

pub fn check_moisture(moisture: f64) -> StatusClassification {
    let band = SensorKind::Moisture.bands().band_for(moisture);
    let optimal = SensorKind::Moisture.optimal_range();
    let shown = format_plain(moisture);

    let message = match band.status() {
        SensorStatus::Normal => "Kelembaban tanah dalam kondisi optimal".to_string(),
        SensorStatus::Warning => {
            let side = if band.is_low() { "rendah" } else { "tinggi" };
            format!("Kelembaban tanah {} ({}%). Nilai optimal: {}", side, shown, optimal)
        }
        SensorStatus::Critical if band.is_low() => format!(
            "⚠️ KRITIS: Kelembaban tanah sangat kering ({}%)! Perlu penyiraman segera. Nilai optimal: {}",
            shown, optimal
        ),
        SensorStatus::Critical => format!(
            "⚠️ KRITIS: Kelembaban tanah sangat basah ({}%)! Perlu drainase segera. Nilai optimal: {}",
            shown, optimal
        ),
    };

    StatusClassification::new(band.status(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_value_as_given() {
        assert_eq!(check_moisture(65.0).message, "Kelembaban tanah dalam kondisi optimal");
        assert_eq!(
            check_moisture(42.5).message,
            "Kelembaban tanah rendah (42.5%). Nilai optimal: 50% - 80%"
        );
        assert_eq!(
            check_moisture(85.0).message,
            "Kelembaban tanah tinggi (85%). Nilai optimal: 50% - 80%"
        );
    }

    #[test]
    fn test_critical_calls_for_action() {
        assert_eq!(
            check_moisture(30.0).message,
            "⚠️ KRITIS: Kelembaban tanah sangat kering (30%)! Perlu penyiraman segera. Nilai optimal: 50% - 80%"
        );
        assert_eq!(
            check_moisture(95.0).message,
            "⚠️ KRITIS: Kelembaban tanah sangat basah (95%)! Perlu drainase segera. Nilai optimal: 50% - 80%"
        );
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(
            check_moisture(-0.0).message,
            "⚠️ KRITIS: Kelembaban tanah sangat kering (0%)! Perlu penyiraman segera. Nilai optimal: 50% - 80%"
        );
    }
}
