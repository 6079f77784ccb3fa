use crate::sensor::{format_fixed1, SensorKind};
use crate::status::{SensorStatus, StatusClassification};

pub fn check_ph(ph: f64) -> StatusClassification {
    let band = SensorKind::Ph.bands().band_for(ph);
    let optimal = SensorKind::Ph.optimal_range();

    let message = match band.status() {
        SensorStatus::Normal => "pH tanah dalam kondisi optimal".to_string(),
        SensorStatus::Warning => {
            let side = if band.is_low() { "asam" } else { "basa" };
            format!("pH tanah terlalu {} ({}). Nilai optimal: {}", side, format_fixed1(ph), optimal)
        }
        SensorStatus::Critical => {
            let side = if band.is_low() { "asam" } else { "basa" };
            format!(
                "⚠️ KRITIS: pH tanah sangat {} ({})! Perlu penanganan segera. Nilai optimal: {}",
                side,
                format_fixed1(ph),
                optimal
            )
        }
    };

    StatusClassification::new(band.status(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Severity;

    #[test]
    fn test_normal_message() {
        let result = check_ph(6.8);
        assert_eq!(result.status, SensorStatus::Normal);
        assert_eq!(result.severity, Severity::Low);
        assert_eq!(result.message, "pH tanah dalam kondisi optimal");
    }

    #[test]
    fn test_warning_messages() {
        assert_eq!(
            check_ph(5.8).message,
            "pH tanah terlalu asam (5.8). Nilai optimal: 6.0 - 7.5"
        );
        assert_eq!(
            check_ph(7.9).message,
            "pH tanah terlalu basa (7.9). Nilai optimal: 6.0 - 7.5"
        );
    }

    #[test]
    fn test_critical_messages() {
        let low = check_ph(5.0);
        assert_eq!(low.status, SensorStatus::Critical);
        assert_eq!(low.severity, Severity::High);
        assert_eq!(
            low.message,
            "⚠️ KRITIS: pH tanah sangat asam (5.0)! Perlu penanganan segera. Nilai optimal: 6.0 - 7.5"
        );
        assert_eq!(
            check_ph(9.2).message,
            "⚠️ KRITIS: pH tanah sangat basa (9.2)! Perlu penanganan segera. Nilai optimal: 6.0 - 7.5"
        );
    }

    #[test]
    fn test_halfway_values_round_up() {
        assert_eq!(
            check_ph(5.25).message,
            "⚠️ KRITIS: pH tanah sangat asam (5.3)! Perlu penanganan segera. Nilai optimal: 6.0 - 7.5"
        );
        assert_eq!(
            check_ph(8.25).message,
            "⚠️ KRITIS: pH tanah sangat basa (8.3)! Perlu penanganan segera. Nilai optimal: 6.0 - 7.5"
        );
        assert_eq!(
            check_ph(5.75).message,
            "pH tanah terlalu asam (5.8). Nilai optimal: 6.0 - 7.5"
        );
    }
}
