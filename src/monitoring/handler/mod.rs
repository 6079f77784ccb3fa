mod evaluate;
mod is_connected;
mod new;
mod process_messages;
mod start_telemetry_listener;
mod time_since_last_update;

use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::bus::MessageBus;
use crate::telemetry::{HistoryBuffer, SensorDataPoint};

pub const CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
enum HandlerMessage {
    TelemetryReceived {
        point: SensorDataPoint,
        timestamp: Instant,
    },
}

/// Listens for one field node's telemetry, keeps its rolling history and
/// publishes an alert for every newly abnormal reading.
#[derive(Debug)]
pub struct MonitoringHandler {
    device_id: String,
    history: HistoryBuffer,
    last_update: Option<Instant>,
    // ids of the alerts raised by the previous point
    active_alert_ids: Vec<String>,
    message_bus: MessageBus,
    message_tx: mpsc::UnboundedSender<HandlerMessage>,
    message_rx: mpsc::UnboundedReceiver<HandlerMessage>,
}

impl MonitoringHandler {
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }
}
