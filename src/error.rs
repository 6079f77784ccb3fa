use thiserror::Error;
use tokio::sync::mpsc::error::SendError;

use crate::bus::BusMessage;
use crate::config::ValidationError;
use crate::sensor::SensorKind;

#[derive(Error, Debug)]
pub enum IotaniError {
    #[error("Non-finite {kind} reading: {value}")]
    NonFiniteReading { kind: SensorKind, value: f64 },

    #[error("Config error: {0}")]
    ConfigError(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Bus error: {0}")]
    BusError(String),
}

impl From<SendError<BusMessage>> for IotaniError {
    fn from(error: SendError<BusMessage>) -> Self {
        IotaniError::BusError(format!("receiver dropped for topic {}", error.0.topic))
    }
}

pub type Result<T> = std::result::Result<T, IotaniError>;
