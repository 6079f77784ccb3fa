pub mod handler;
mod payload;

pub use handler::{MonitoringHandler, CONNECTION_TIMEOUT};
pub use payload::parse_telemetry_payload;
