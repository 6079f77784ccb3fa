use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::export::ExportFormat;

/// Telemetry arrives every few seconds, so a slow tick is enough.
const TICK_FPS: f64 = 4.0;

#[derive(Clone, Debug)]
pub enum Event {
    /// Drives telemetry processing and redraws.
    Tick,
    Crossterm(CrosstermEvent),
    App(AppEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Quit,
    Export(ExportFormat),
}

/// Merges terminal input, ticks and app events into one stream.
#[derive(Debug)]
pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Spawns the terminal reader; requires a tokio runtime.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(read_terminal(sender.clone()));
        Self { sender, receiver }
    }

    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Event channel closed")
    }

    pub fn send(&mut self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(app_event));
    }
}

async fn read_terminal(sender: mpsc::UnboundedSender<Event>) {
    let mut reader = crossterm::event::EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_secs_f64(1.0 / TICK_FPS));

    loop {
        let event = tokio::select! {
            _ = sender.closed() => break,
            _ = tick.tick() => Event::Tick,
            Some(Ok(evt)) = reader.next().fuse() => Event::Crossterm(evt),
        };
        if sender.send(event).is_err() {
            break;
        }
    }
}
