use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

const DEFAULT_HISTORY_LENGTH: usize = 20;
const DEFAULT_LOG_LEVEL: &str = "info,history_store=debug";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub history: HistorySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistorySettings {
    /// Messages returned by a recent-history read when the caller gives no length.
    pub default_history_length: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            default_history_length: DEFAULT_HISTORY_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            enable_json: false,
        }
    }
}

impl Settings {
    /// Loads settings for the environment named by `APP_ENVIRONMENT`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env()?;
        Self::load_for(environment)
    }

    /// Layers `appsettings.{environment}` (optional) and `APP_*` variables
    /// over the built-in defaults. Nested keys use `__`, e.g.
    /// `APP_HISTORY__DEFAULT_HISTORY_LENGTH`.
    pub fn load_for(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .set_default("history.default_history_length", DEFAULT_HISTORY_LENGTH as u64)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        configuration.try_deserialize()
    }
}
