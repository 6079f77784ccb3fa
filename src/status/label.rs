use super::SensorStatus;

impl SensorStatus {
    /// Banner label shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            SensorStatus::Normal => "NORMAL",
            SensorStatus::Warning => "PERINGATAN",
            SensorStatus::Critical => "KRITIS",
        }
    }
}
