use super::SensorKind;

impl SensorKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            SensorKind::Ph => "pH Tanah",
            SensorKind::Moisture => "Kelembaban Tanah",
            SensorKind::Temperature => "Suhu Tanah",
        }
    }
}
