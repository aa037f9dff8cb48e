use crate::gym::ClassSchedule;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the console.
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

    const fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "info",
            Self::Test | Self::Production => "warn",
        }
    }
}

/// Top-level configuration for a console session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub schedule: ClassSchedule,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("GYM_ENV").unwrap_or_else(|_| "production".to_string()),
        );

        let log_level = match env::var("GYM_LOG_LEVEL") {
            Ok(level) if level.trim().is_empty() => return Err(ConfigError::EmptyLogLevel),
            Ok(level) => level,
            Err(_) => environment.default_log_level().to_string(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            schedule: ClassSchedule::standard(),
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyLogLevel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyLogLevel => write!(f, "GYM_LOG_LEVEL must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
