use crate::sensor::{format_fixed1, format_plain};

use super::SensorKind;

impl SensorKind {
    /// Human-readable normal range, e.g. `6.0 - 7.5` or `20°C - 30°C`.
    pub fn optimal_range(&self) -> String {
        let bands = self.bands();
        match self {
            SensorKind::Ph => format!("{} - {}", format_fixed1(bands.normal_min), format_fixed1(bands.normal_max)),
            _ => {
                let unit = self.unit();
                format!(
                    "{}{} - {}{}",
                    format_plain(bands.normal_min),
                    unit,
                    format_plain(bands.normal_max),
                    unit
                )
            }
        }
    }
}
