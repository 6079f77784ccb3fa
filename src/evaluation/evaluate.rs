use crate::classifier::classify;
use crate::notification::derive_notifications;
use crate::status::SensorStatus;

use super::{SensorEvaluation, SensorSnapshot};

impl SensorSnapshot {
    pub fn evaluate(&self) -> SensorEvaluation {
        let ph = classify(&self.ph);
        let moisture = classify(&self.moisture);
        let temperature = classify(&self.temperature);
        let overall = SensorStatus::worst_of([ph.status, moisture.status, temperature.status]);

        SensorEvaluation {
            snapshot: *self,
            overall,
            ph,
            moisture,
            temperature,
            notifications: derive_notifications(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::overall_status;

    #[test]
    fn test_evaluate_agrees_with_resolver() {
        for (ph, moisture, temperature) in [
            (6.8, 65.0, 27.0),
            (5.8, 65.0, 27.0),
            (6.8, 95.0, 17.0),
            (9.0, 45.0, 33.0),
        ] {
            let snapshot = SensorSnapshot::new(ph, moisture, temperature).unwrap();
            let evaluation = snapshot.evaluate();
            assert_eq!(evaluation.overall, overall_status(&snapshot));
        }
    }

    #[test]
    fn test_evaluate_collects_notifications() {
        let evaluation = SensorSnapshot::new(5.0, 85.0, 27.0).unwrap().evaluate();
        assert_eq!(evaluation.overall, SensorStatus::Critical);
        assert_eq!(evaluation.moisture.status, SensorStatus::Warning);
        assert_eq!(evaluation.temperature.status, SensorStatus::Normal);
        assert_eq!(evaluation.notifications.len(), 2);
    }
}
