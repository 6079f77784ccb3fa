use std::time::Instant;

use chrono::Local;

use crate::monitoring::parse_telemetry_payload;
use crate::{log_debug, log_error, log_info, log_warn};

use super::{HandlerMessage, MonitoringHandler};

impl MonitoringHandler {
    /// Subscribes before returning so no message published afterwards is missed.
    pub(super) async fn start_telemetry_listener(&mut self, bus_topic: String) {
        let tx = self.message_tx.clone();
        let device_id = self.device_id.clone();

        let mut receiver = self.message_bus.subscribe(bus_topic.clone()).await;
        log_info!("📻 Monitoring {} on topic: {}", device_id, bus_topic);

        tokio::spawn(async move {
            while let Some(msg) = receiver.recv().await {
                log_debug!("📻 [{}] Raw payload: {}", device_id, msg.payload);

                match parse_telemetry_payload(&msg.payload, Local::now().naive_local()) {
                    Ok(point) => {
                        log_info!("📻 Telemetry [{}]: pH={}, moisture={}, temperature={}",
                            device_id, point.ph, point.moisture, point.temperature);

                        if tx.send(HandlerMessage::TelemetryReceived {
                            point,
                            timestamp: Instant::now(),
                        }).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        log_warn!("📻 [{}] Dropping telemetry: {} ({})", device_id, e, msg.payload);
                    }
                }
            }

            log_error!("📻 [{}] Telemetry listener ended!", device_id);
        });
    }
}
