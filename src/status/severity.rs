use super::{SensorStatus, Severity};

impl SensorStatus {
    pub fn severity(&self) -> Severity {
        match self {
            SensorStatus::Normal => Severity::Low,
            SensorStatus::Warning => Severity::Medium,
            SensorStatus::Critical => Severity::High,
        }
    }
}
