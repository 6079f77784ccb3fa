use tokio::sync::mpsc;

use crate::bus::MessageBus;
use crate::telemetry::HistoryBuffer;

use super::MonitoringHandler;

impl MonitoringHandler {
    /// Must be called inside a tokio runtime; the telemetry listener is
    /// spawned immediately. `history` seeds the chart before live data arrives.
    pub async fn new(
        message_bus: MessageBus,
        device_id: String,
        bus_topic: String,
        history: HistoryBuffer,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut handler = Self {
            device_id,
            history,
            last_update: None,
            active_alert_ids: Vec::new(),
            message_bus,
            message_tx,
            message_rx,
        };

        handler.start_telemetry_listener(bus_topic).await;

        handler
    }
}
