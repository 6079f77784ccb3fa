use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use iotani_monitor::app::App;
use iotani_monitor::config::MonitorConfig;
use iotani_monitor::log_info;
use iotani_monitor::util::log::init_logger;

const DEFAULT_CONFIG_PATH: &str = "config.yml";

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = MonitorConfig::load_or_default(&config_path)?;

    init_logger(&config.log_dir)?;

    // stdout belongs to the TUI
    let trace_file = File::create(config.log_dir.join("trace.log"))?;
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(Mutex::new(trace_file))
        .init();

    // logging is only live from here on
    if config_path.exists() {
        log_info!("Loaded config from {}", config_path.display());
    } else {
        log_info!("No config at {}, using defaults", config_path.display());
    }

    let terminal = ratatui::init();
    let result = App::new(config).await?.run(terminal).await;
    ratatui::restore();
    result
}
