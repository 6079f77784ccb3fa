use crate::bus::messages;
use crate::error::Result;
use crate::notification::Notification;
use crate::{log_error, log_warn};

use super::{HandlerMessage, MonitoringHandler};

impl MonitoringHandler {
    /// Drains queued telemetry without blocking and returns how many points
    /// were added. Alerts not raised by the previous point are published.
    ///
    /// A failed publish does not stop the drain; every queued point still
    /// lands in the history and the first error is returned afterwards.
    pub async fn process_messages(&mut self) -> Result<usize> {
        let mut processed = 0;
        let mut first_error = None;

        while let Ok(msg) = self.message_rx.try_recv() {
            match msg {
                HandlerMessage::TelemetryReceived { point, timestamp } => {
                    self.history.push(point);
                    self.last_update = Some(timestamp);
                    processed += 1;

                    if let Err(e) = self.publish_new_alerts().await {
                        log_error!("🚨 [{}] Publishing alerts failed: {}", self.device_id, e);
                        first_error.get_or_insert(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(processed),
        }
    }

    async fn publish_new_alerts(&mut self) -> Result<()> {
        let Some(evaluation) = self.evaluate()? else {
            return Ok(());
        };

        let fresh: Vec<Notification> = evaluation
            .notifications
            .iter()
            .filter(|n| !self.active_alert_ids.contains(&n.id))
            .cloned()
            .collect();

        // a failed publish is not retried on the next point
        self.active_alert_ids = evaluation
            .notifications
            .into_iter()
            .map(|n| n.id)
            .collect();

        let mut first_error = None;
        for notification in &fresh {
            log_warn!("🚨 [{}] {}", self.device_id, notification.message);
            let published = match messages::alert(notification, self.device_id.clone()) {
                Ok(message) => self.message_bus.publish(message).await,
                Err(e) => Err(e),
            };
            if let Err(e) = published {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
