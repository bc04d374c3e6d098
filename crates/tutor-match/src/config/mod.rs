use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::matching::sort::SortMode;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub dataset: DatasetConfig,
    pub search: SearchConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let path = match env::var("APP_DATASET") {
            Ok(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyDatasetPath),
            Ok(raw) => Some(PathBuf::from(raw.trim())),
            Err(_) => None,
        };

        let default_sort = env::var("APP_DEFAULT_SORT")
            .unwrap_or_else(|_| SortMode::default().label().to_string())
            .parse::<SortMode>()
            .map_err(ConfigError::InvalidSortMode)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            dataset: DatasetConfig { path },
            search: SearchConfig { default_sort },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where profiles come from; `None` selects the bundled sample directory.
#[derive(Debug, Clone, Default)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
}

/// Defaults applied to search requests that leave options unset.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub default_sort: SortMode,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyDatasetPath,
    InvalidSortMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyDatasetPath => {
                write!(f, "APP_DATASET must name a .json or .csv file when set")
            }
            ConfigError::InvalidSortMode(reason) => write!(f, "APP_DEFAULT_SORT: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}
