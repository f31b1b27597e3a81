use std::path::PathBuf;

use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub level: String,
    pub log_directory: PathBuf,
    pub log_file_name: String,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: settings.json,
            level: settings.level.clone(),
            log_directory: PathBuf::from(&settings.directory),
            log_file_name: settings.file_name.clone(),
        }
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.log_directory.join(&self.log_file_name)
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn default_filter(&self) -> String {
        format!("info,youreview={},tower_http=debug", self.level)
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            json_format: false,
            level: "debug".to_string(),
            log_directory: PathBuf::from("logs"),
            log_file_name: "app.log".to_string(),
        }
    }
}
