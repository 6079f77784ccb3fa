use super::SensorKind;

impl SensorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Ph => "pH",
            SensorKind::Moisture => "moisture",
            SensorKind::Temperature => "temperature",
        }
    }
}
