pub mod app;
pub mod bus;
pub mod classifier;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod event;
pub mod export;
pub mod monitoring;
pub mod notification;
pub mod sensor;
pub mod status;
pub mod telemetry;
pub mod ui;
pub mod util;

pub use classifier::classify;
pub use config::MonitorConfig;
pub use error::{IotaniError, Result};
pub use evaluation::{overall_status, SensorEvaluation, SensorSnapshot};
pub use notification::{derive_notifications, sort_for_display, AlertType, Notification};
pub use sensor::{SensorKind, SensorReading};
pub use status::{SensorStatus, Severity, StatusClassification};
