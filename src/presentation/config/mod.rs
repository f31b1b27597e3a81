mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, CorsSettings, LlmSettings, LoggingSettings, ServerSettings, Settings,
    SettingsError, VideoSettings, YtDlpSettings,
};
