use crate::sensor::SensorBands;

use super::SensorKind;

const PH_BANDS: SensorBands = SensorBands {
    warning_min: 5.5,
    normal_min: 6.0,
    normal_max: 7.5,
    warning_max: 8.0,
};

const MOISTURE_BANDS: SensorBands = SensorBands {
    warning_min: 40.0,
    normal_min: 50.0,
    normal_max: 80.0,
    warning_max: 90.0,
};

const TEMPERATURE_BANDS: SensorBands = SensorBands {
    warning_min: 15.0,
    normal_min: 20.0,
    normal_max: 30.0,
    warning_max: 35.0,
};

impl SensorKind {
    pub fn bands(&self) -> &'static SensorBands {
        match self {
            SensorKind::Ph => &PH_BANDS,
            SensorKind::Moisture => &MOISTURE_BANDS,
            SensorKind::Temperature => &TEMPERATURE_BANDS,
        }
    }
}
