use crate::bus::{BusMessage, BusReceiver, MessageBus, ALERT_TOPIC};
use crate::config::MonitorConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::evaluation::SensorEvaluation;
use crate::export::{write_export, ExportFormat};
use crate::monitoring::MonitoringHandler;
use crate::telemetry::{
    generate_history, generate_weather, spawn_mock_telemetry, HistoryBuffer, WeatherSnapshot,
};
use crate::{log_error, log_info, log_warn};
use chrono::Local;
use color_eyre::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use tokio::task::JoinHandle;

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: MonitorConfig,
    /// Monitoring handler for the field node
    pub handler: MonitoringHandler,
    /// Latest evaluation, refreshed whenever new telemetry is processed
    pub evaluation: Option<SensorEvaluation>,
    pub weather: WeatherSnapshot,
    /// Alerts seen on the bus since startup
    pub alerts_raised: usize,
    /// One-line feedback shown in the footer (export results, errors)
    pub status_line: Option<String>,
    /// Bus receiver for every published message
    pub bus_receiver: BusReceiver,
    /// Event handler.
    pub events: EventHandler,
    simulator: JoinHandle<()>,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub async fn new(config: MonitorConfig) -> Result<Self> {
        let (message_bus, bus_receiver) = MessageBus::new();
        let mut rng = StdRng::from_entropy();

        let seed = generate_history(config.history_days, Local::now().date_naive(), &mut rng);
        let history = HistoryBuffer::from_points(config.history_capacity, seed);

        let handler = MonitoringHandler::new(
            message_bus.clone(),
            config.device_id.clone(),
            config.bus_topic.clone(),
            history,
        )
        .await;

        let simulator = spawn_mock_telemetry(
            message_bus,
            config.bus_topic.clone(),
            config.device_id.clone(),
            config.sample_interval(),
        );

        let evaluation = handler.evaluate()?;
        log_info!("🌱 IoTani monitor started for {}", config.device_id);

        Ok(Self {
            running: true,
            config,
            handler,
            evaluation,
            weather: generate_weather(&mut rng),
            alerts_raised: 0,
            status_line: None,
            bus_receiver,
            events: EventHandler::new(),
            simulator,
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                // save power
                needs_redraw = false;
            }

            tokio::select! {
                event = self.events.next() => {
                    match event? {
                        Event::Tick => {
                            needs_redraw = self.refresh().await;
                        }
                        Event::Crossterm(CrosstermEvent::Key(key_event)) => {
                            self.handle_key_events(key_event);
                        }
                        Event::Crossterm(CrosstermEvent::Resize(_, _)) => {
                            needs_redraw = true;
                        }
                        Event::Crossterm(_) => {}
                        Event::App(AppEvent::Quit) => self.quit(),
                        Event::App(AppEvent::Export(format)) => {
                            self.export(format);
                            needs_redraw = true;
                        }
                    }
                }
                message = self.bus_receiver.recv() => {
                    if let Some(msg) = message {
                        self.handle_bus_message(msg);
                        needs_redraw = true;
                    }
                }
            }
        }

        self.simulator.abort();
        Ok(())
    }

    /// Pulls queued telemetry into the handler. Returns whether anything changed.
    pub async fn refresh(&mut self) -> bool {
        let changed = match self.handler.process_messages().await {
            Ok(count) => count > 0,
            Err(e) => {
                // queued points were still drained into the history
                log_error!("Processing telemetry failed: {}", e);
                self.status_line = Some(format!("Error: {}", e));
                true
            }
        };

        if changed {
            match self.handler.evaluate() {
                Ok(evaluation) => self.evaluation = evaluation,
                Err(e) => log_error!("Evaluation failed: {}", e),
            }
        }
        changed
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            KeyCode::Char('c') => self.events.send(AppEvent::Export(ExportFormat::Csv)),
            KeyCode::Char('h') => self.events.send(AppEvent::Export(ExportFormat::Html)),
            _ => {}
        }
    }

    pub fn handle_bus_message(&mut self, message: BusMessage) {
        if message.topic == ALERT_TOPIC {
            self.alerts_raised += 1;
        }
    }

    pub fn export(&mut self, format: ExportFormat) {
        let data = self.handler.history().to_vec();
        let result = write_export(
            &self.config.export_dir,
            &data,
            &self.config.data_type,
            format,
            Local::now().date_naive(),
        );

        self.status_line = Some(match result {
            Ok(path) => format!("Exported {} rows to {}", data.len(), path.display()),
            Err(e) => {
                log_warn!("Export failed: {}", e);
                format!("Export failed: {}", e)
            }
        });
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
