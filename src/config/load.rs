use std::fs;
use std::path::Path;

use crate::error::Result;

use super::MonitorConfig;

impl MonitorConfig {
    /// Parses and validates a YAML config.
    pub fn from_yaml_str(config_yaml: &str) -> Result<Self> {
        // serde_yaml reads an empty document as null
        let config: MonitorConfig = if config_yaml.trim().is_empty() {
            MonitorConfig::default()
        } else {
            serde_yaml::from_str(config_yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path)?;
        Self::from_yaml_str(&config_content)
    }

    /// Loads `path` when it exists, otherwise falls back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
