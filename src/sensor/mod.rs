mod bands;
mod kind;
mod number_format;
mod reading;

pub use bands::{Band, SensorBands};
pub use kind::SensorKind;
pub use number_format::{format_fixed1, format_plain};
pub use reading::SensorReading;
