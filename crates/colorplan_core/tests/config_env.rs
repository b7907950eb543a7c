use chrono::Weekday;
use colorplan_core::config::{ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_SEED, ENV_WEEK_START};
use colorplan_core::{default_log_level, ConfigError, PlannerConfig};
use std::collections::HashMap;
use std::path::PathBuf;

fn resolve(pairs: &[(&str, &str)]) -> Result<PlannerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    PlannerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn missing_variables_fall_back_to_defaults() {
    let config = resolve(&[]).unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.log_level, default_log_level());
    assert_eq!(config.log_dir, None);
    assert_eq!(config.week_start, Weekday::Mon);
    assert!(config.seed_sample_data);
}

#[test]
fn blank_variables_are_ignored() {
    let config = resolve(&[(ENV_LOG_LEVEL, "  "), (ENV_WEEK_START, "")]).unwrap();
    assert_eq!(config, PlannerConfig::default());
}

#[test]
fn all_variables_are_applied() {
    let config = resolve(&[
        (ENV_LOG_LEVEL, "Warning"),
        (ENV_LOG_DIR, "/var/log/colorplan"),
        (ENV_WEEK_START, "sun"),
        (ENV_SEED, "off"),
    ])
    .unwrap();

    assert_eq!(config.log_level, "warn");
    assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/colorplan")));
    assert_eq!(config.week_start, Weekday::Sun);
    assert!(!config.seed_sample_data);
}

#[test]
fn invalid_values_are_reported_per_variable() {
    assert!(matches!(
        resolve(&[(ENV_LOG_LEVEL, "verbose")]),
        Err(ConfigError::InvalidLogLevel(_))
    ));
    assert_eq!(
        resolve(&[(ENV_LOG_DIR, "logs")]),
        Err(ConfigError::RelativeLogDir("logs".to_string()))
    );
    assert_eq!(
        resolve(&[(ENV_WEEK_START, "someday")]),
        Err(ConfigError::InvalidWeekStart("someday".to_string()))
    );

    let err = resolve(&[(ENV_SEED, "maybe")]).unwrap_err();
    assert!(err.to_string().contains(ENV_SEED));
}
