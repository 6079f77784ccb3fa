use super::SensorKind;

impl SensorKind {
    pub fn unit(&self) -> &'static str {
        match self {
            SensorKind::Ph => "",
            SensorKind::Moisture => "%",
            SensorKind::Temperature => "°C",
        }
    }
}
