use super::{MonitorConfig, ValidationError};

impl MonitorConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.device_id.trim().is_empty() {
            return Err(ValidationError {
                field: "device_id".to_string(),
                error: "Cannot be empty".to_string(),
            });
        }

        if self.bus_topic.trim().is_empty() {
            return Err(ValidationError {
                field: "bus_topic".to_string(),
                error: "Cannot be empty".to_string(),
            });
        }

        if self.sample_interval_secs == 0 {
            return Err(ValidationError {
                field: "sample_interval_secs".to_string(),
                error: "Must be at least 1".to_string(),
            });
        }

        if self.history_days == 0 {
            return Err(ValidationError {
                field: "history_days".to_string(),
                error: "Must be at least 1".to_string(),
            });
        }

        if self.history_capacity == 0 {
            return Err(ValidationError {
                field: "history_capacity".to_string(),
                error: "Must be at least 1".to_string(),
            });
        }

        // data_type ends up in export file names
        if self.data_type.is_empty()
            || !self.data_type.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError {
                field: "data_type".to_string(),
                error: "Must be non-empty and contain only letters, digits, '-' or '_'".to_string(),
            });
        }

        if self.log_dir.as_os_str().is_empty() {
            return Err(ValidationError {
                field: "log_dir".to_string(),
                error: "Cannot be empty".to_string(),
            });
        }

        if self.export_dir.as_os_str().is_empty() {
            return Err(ValidationError {
                field: "export_dir".to_string(),
                error: "Cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::MonitorConfig;
    use std::path::PathBuf;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = MonitorConfig::from_yaml_str("").unwrap();
        assert_eq!(config, MonitorConfig::default());
        assert_eq!(config.sample_interval_secs, 5);
        assert_eq!(config.history_capacity, 50);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
device_id: "kebun-cabai-02"
sample_interval_secs: 2
export_dir: "/tmp/iotani"
"#;
        let config = MonitorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.device_id, "kebun-cabai-02");
        assert_eq!(config.sample_interval_secs, 2);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/iotani"));
        assert_eq!(config.history_days, 50);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = MonitorConfig::from_yaml_str("sample_interval_secs: 0");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = MonitorConfig {
            history_capacity: 0,
            ..MonitorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "history_capacity");
    }

    #[test]
    fn test_data_type_must_be_file_name_safe() {
        let config = MonitorConfig {
            data_type: "../harian".to_string(),
            ..MonitorConfig::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "data_type");
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        assert!(MonitorConfig::from_yaml_str("sample_interval_secs: [oops").is_err());
    }
}
