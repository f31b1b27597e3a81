use std::path::PathBuf;

use youreview::infrastructure::observability::TracingConfig;
use youreview::presentation::config::{Environment, LoggingSettings};

fn logging_settings() -> LoggingSettings {
    LoggingSettings {
        directory: "var/log".to_string(),
        file_name: "service.log".to_string(),
        level: "warn".to_string(),
        json: true,
    }
}

#[test]
fn given_logging_settings_when_building_config_then_fields_are_mapped() {
    let config = TracingConfig::from_settings(&logging_settings(), Environment::Prod);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.log_file_path(), PathBuf::from("var/log/service.log"));
}

#[test]
fn given_level_when_building_default_filter_then_applies_to_crate_target() {
    let config = TracingConfig::from_settings(&logging_settings(), Environment::Local);

    assert_eq!(
        config.default_filter(),
        "info,youreview=warn,tower_http=debug"
    );
}

#[test]
fn given_default_config_when_created_then_matches_logging_defaults() {
    let config = TracingConfig::default();

    assert_eq!(config.environment, "local");
    assert!(!config.json_format);
    assert_eq!(config.default_filter(), "info,youreview=debug,tower_http=debug");
    assert_eq!(config.log_file_path(), PathBuf::from("logs/app.log"));
}
