use std::time::Duration;

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;

use crate::bus::{messages, MessageBus};
use crate::{log_debug, log_info, log_warn};

use super::generate_point;

/// Publishes a mock point on `topic` every `interval` until the bus closes.
pub fn spawn_mock_telemetry(
    bus: MessageBus,
    topic: String,
    device_id: String,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        log_info!("🌱 Mock telemetry for {} publishing on {} every {:?}", device_id, topic, interval);
        let mut rng = StdRng::from_entropy();
        let mut ticker = tokio::time::interval(interval);

        loop {
            ticker.tick().await;
            let point = generate_point(Local::now().naive_local(), &mut rng);

            let message = match messages::telemetry(topic.clone(), &point, device_id.clone()) {
                Ok(message) => message,
                Err(e) => {
                    log_warn!("🌱 [{}] Could not encode telemetry: {}", device_id, e);
                    continue;
                }
            };

            log_debug!("🌱 [{}] {}", device_id, message.payload);
            if let Err(e) = bus.publish(message).await {
                log_warn!("🌱 [{}] Mock telemetry stopped: {}", device_id, e);
                break;
            }
        }
    })
}
