mod data_point;
mod generator;
mod history_buffer;
mod simulator;
mod weather;

pub use data_point::{latest_readings, SensorDataPoint};
pub use generator::{generate_history, generate_point};
pub use history_buffer::{HistoryBuffer, DEFAULT_HISTORY_CAPACITY};
pub use simulator::spawn_mock_telemetry;
pub use weather::{generate_weather, WeatherCondition, WeatherSnapshot};
