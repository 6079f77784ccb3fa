use crate::sensor::{format_plain, SensorKind};
use crate::status::{SensorStatus, StatusClassification};

pub fn check_temperature(temperature: f64) -> StatusClassification {
    let band = SensorKind::Temperature.bands().band_for(temperature);
    let optimal = SensorKind::Temperature.optimal_range();
    let shown = format_plain(temperature);

    let message = match band.status() {
        SensorStatus::Normal => "Suhu tanah dalam kondisi optimal".to_string(),
        SensorStatus::Warning => {
            let side = if band.is_low() { "rendah" } else { "tinggi" };
            format!("Suhu tanah {} ({}°C). Nilai optimal: {}", side, shown, optimal)
        }
        SensorStatus::Critical => {
            let side = if band.is_low() { "dingin" } else { "panas" };
            format!(
                "⚠️ KRITIS: Suhu tanah sangat {} ({}°C)! Perlu perhatian khusus. Nilai optimal: {}",
                side, shown, optimal
            )
        }
    };

    StatusClassification::new(band.status(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(check_temperature(27.0).message, "Suhu tanah dalam kondisi optimal");
        assert_eq!(
            check_temperature(18.0).message,
            "Suhu tanah rendah (18°C). Nilai optimal: 20°C - 30°C"
        );
        assert_eq!(
            check_temperature(32.5).message,
            "Suhu tanah tinggi (32.5°C). Nilai optimal: 20°C - 30°C"
        );
        assert_eq!(
            check_temperature(10.0).message,
            "⚠️ KRITIS: Suhu tanah sangat dingin (10°C)! Perlu perhatian khusus. Nilai optimal: 20°C - 30°C"
        );
        assert_eq!(
            check_temperature(40.0).message,
            "⚠️ KRITIS: Suhu tanah sangat panas (40°C)! Perlu perhatian khusus. Nilai optimal: 20°C - 30°C"
        );
    }
}
