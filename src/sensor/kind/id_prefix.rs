use super::SensorKind;

impl SensorKind {
    /// Prefix of the notification id (`"<prefix>-<value>"`).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            SensorKind::Ph => "ph",
            SensorKind::Moisture => "moisture",
            SensorKind::Temperature => "temperature",
        }
    }
}
