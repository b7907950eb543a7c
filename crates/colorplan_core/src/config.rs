//! Runtime configuration resolved from environment variables.
//!
//! # Responsibility
//! - Collect the few knobs the planner and its hosts need (log level and
//!   directory, first day of week, sample seeding).
//! - Keep resolution testable through `from_lookup`.
//!
//! # Invariants
//! - Unset or blank variables fall back to `PlannerConfig::default()`.
//! - `log_dir`, when set, is an absolute path.

use crate::logging::{default_log_level, normalize_level};
use chrono::Weekday;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "COLORPLAN_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "COLORPLAN_LOG_DIR";
pub const ENV_WEEK_START: &str = "COLORPLAN_WEEK_START";
pub const ENV_SEED: &str = "COLORPLAN_SEED";

/// Planner host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: &'static str,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
    /// First column of week views.
    pub week_start: Weekday,
    /// Whether a new session starts with the sample day.
    pub seed_sample_data: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            week_start: Weekday::Mon,
            seed_sample_data: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(String),
    InvalidWeekStart(String),
    InvalidBool { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{ENV_LOG_LEVEL}: {message}"),
            Self::RelativeLogDir(value) => {
                write!(f, "{ENV_LOG_DIR} must be an absolute path, got `{value}`")
            }
            Self::InvalidWeekStart(value) => write!(
                f,
                "{ENV_WEEK_START}: unsupported weekday `{value}`; expected mon..sun"
            ),
            Self::InvalidBool { key, value } => {
                write!(f, "{key}: expected true|false|1|0, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

impl PlannerConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(ConfigError::InvalidLogLevel)?;
        }

        if let Some(dir) = read(ENV_LOG_DIR) {
            let path = PathBuf::from(&dir);
            if !path.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir));
            }
            config.log_dir = Some(path);
        }

        if let Some(week_start) = read(ENV_WEEK_START) {
            config.week_start = week_start
                .parse::<Weekday>()
                .map_err(|_| ConfigError::InvalidWeekStart(week_start.clone()))?;
        }

        if let Some(seed) = read(ENV_SEED) {
            config.seed_sample_data = parse_bool(ENV_SEED, &seed)?;
        }

        Ok(config)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
