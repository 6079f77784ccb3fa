use super::SensorKind;

impl SensorKind {
    /// Every kind, in the order readings are evaluated.
    pub fn all() -> [SensorKind; 3] {
        [
            SensorKind::Ph,
            SensorKind::Moisture,
            SensorKind::Temperature,
        ]
    }
}
