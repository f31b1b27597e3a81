use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigBuilder, ConfigError, File, builder::DefaultState};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub video: VideoSettings,
    pub audio: AudioSettings,
    pub yt_dlp: YtDlpSettings,
    pub logging: LoggingSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub summary_language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoSettings {
    pub max_duration_seconds: u64,
    pub transcript_languages: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub output_dir: PathBuf,
    pub codec: String,
    pub quality: String,
    pub cleanup_grace_period_ms: u64,
}

impl AudioSettings {
    pub fn cleanup_grace_period(&self) -> Duration {
        Duration::from_millis(self.cleanup_grace_period_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct YtDlpSettings {
    pub binary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub directory: String,
    pub file_name: String,
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("llm.api_key is not configured (set APP_LLM__API_KEY or GROQ_API_KEY)")]
    MissingApiKey,
}

impl Settings {
    /// Loads defaults, then `appsettings.<env>` if present, then `APP_*`
    /// environment variables (`__` separates nested keys).
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let config = Self::defaults()?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(" ")
                    .with_list_parse_key("video.transcript_languages")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()
    }

    /// Builder preloaded with every default. `GROQ_API_KEY` seeds the API key
    /// so any explicit `llm.api_key` source overrides it.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default(
                "llm.api_key",
                std::env::var("GROQ_API_KEY").unwrap_or_default(),
            )?
            .set_default("llm.base_url", "https://api.groq.com/openai/v1")?
            .set_default("llm.model", "llama-3.1-70b-versatile")?
            .set_default("llm.max_tokens", 2048_i64)?
            .set_default("llm.temperature", 0.3_f64)?
            .set_default("llm.summary_language", "Spanish")?
            .set_default("video.max_duration_seconds", 1800_i64)?
            .set_default("video.transcript_languages", vec!["es", "pt", "en"])?
            .set_default("audio.output_dir", "temp_audios")?
            .set_default("audio.codec", "mp3")?
            .set_default("audio.quality", "192")?
            .set_default("audio.cleanup_grace_period_ms", 2000_i64)?
            .set_default("yt_dlp.binary", "yt-dlp")?
            .set_default("logging.directory", "logs")?
            .set_default("logging.file_name", "app.log")?
            .set_default("logging.level", "debug")?
            .set_default("logging.json", false)?
            .set_default(
                "cors.allowed_origins",
                vec!["http://localhost:5173", "https://youreview.netlify.app"],
            )
    }

    fn validate(self) -> Result<Self, SettingsError> {
        if self.llm.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey);
        }
        Ok(self)
    }
}
