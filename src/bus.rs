use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use std::collections::HashMap;
use crate::error::Result;
use crate::log_debug;

pub const TELEMETRY_TOPIC: &str = "sensor.telemetry";
pub const ALERT_TOPIC: &str = "sensor.alert";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusMessage {
    pub topic: String,
    pub payload: String,
    pub source: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl BusMessage {
    pub fn new(topic: String, payload: String, source: String) -> Self {
        Self {
            topic,
            payload,
            source,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

pub type BusReceiver = mpsc::UnboundedReceiver<BusMessage>;
pub type BusSender = mpsc::UnboundedSender<BusMessage>;

#[derive(Debug, Clone)]
pub struct MessageBus {
    sender: BusSender,
    // Arc<RwLock> so clones share one subscriber table
    subscribers: Arc<RwLock<HashMap<String, Vec<BusSender>>>>,
}

impl MessageBus {
    pub fn new() -> (Self, BusReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (
            Self {
                sender,
                subscribers: Arc::new(RwLock::new(HashMap::new())),
            },
            receiver,
        )
    }

    pub async fn publish(&self, message: BusMessage) -> Result<()> {
        log_debug!("bus publish on {}: {}", message.topic, message.payload);

        // Topic subscribers first; the main receiver takes ownership last
        {
            let subscribers = self.subscribers.read().await;
            if let Some(subs) = subscribers.get(&message.topic) {
                for subscriber in subs {
                    let _ = subscriber.send(message.clone());
                }
            }
        }

        self.sender.send(message)?;
        Ok(())
    }

    pub async fn subscribe(&self, topic: String) -> BusReceiver {
        let (sender, receiver) = mpsc::unbounded_channel();

        let mut subscribers = self.subscribers.write().await;
        subscribers
            .entry(topic)
            .or_insert_with(Vec::new)
            .push(sender);

        receiver
    }
}

// Helpers for the message types the monitor exchanges
pub mod messages {
    use super::{BusMessage, ALERT_TOPIC};
    use crate::error::Result;
    use crate::notification::Notification;
    use crate::telemetry::SensorDataPoint;

    pub fn telemetry(topic: String, point: &SensorDataPoint, source: String) -> Result<BusMessage> {
        let payload = serde_json::to_string(point)?;
        Ok(BusMessage::new(topic, payload, source))
    }

    pub fn alert(notification: &Notification, source: String) -> Result<BusMessage> {
        let payload = serde_json::to_string(notification)?;
        Ok(BusMessage::new(ALERT_TOPIC.to_string(), payload, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_main_receiver_and_subscribers() {
        let (bus, mut main_rx) = MessageBus::new();
        let mut alerts = bus.subscribe(ALERT_TOPIC.to_string()).await;
        let mut telemetry = bus.subscribe(TELEMETRY_TOPIC.to_string()).await;

        bus.publish(BusMessage::new(
            ALERT_TOPIC.to_string(),
            "{}".to_string(),
            "test".to_string(),
        ))
        .await
        .unwrap();

        assert_eq!(main_rx.recv().await.unwrap().topic, ALERT_TOPIC);
        assert_eq!(alerts.recv().await.unwrap().source, "test");
        assert!(telemetry.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_publish_fails_once_main_receiver_is_gone() {
        let (bus, main_rx) = MessageBus::new();
        drop(main_rx);

        let result = bus
            .publish(BusMessage::new("x".to_string(), String::new(), "test".to_string()))
            .await;
        assert!(result.is_err());
    }
}
