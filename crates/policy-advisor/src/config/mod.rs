use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::recommendation::DEFAULT_TOP_N;

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
    pub recommendation: RecommendationSettings,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let top_n = match env::var("POLICY_TOP_N") {
            Ok(raw) => parse_top_n(&raw)?,
            Err(_) => DEFAULT_TOP_N,
        };

        let catalog_path = env::var("POLICY_CATALOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            recommendation: RecommendationSettings {
                top_n,
                catalog_path,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_top_n(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidTopN {
            value: raw.to_string(),
        }),
    }
}

/// Defaults applied when the caller does not override them per request.
#[derive(Debug, Clone)]
pub struct RecommendationSettings {
    pub top_n: usize,
    /// Policy catalog to load; `None` selects the bundled sample catalog.
    pub catalog_path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTopN { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTopN { value } => {
                write!(f, "POLICY_TOP_N must be a positive integer (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
