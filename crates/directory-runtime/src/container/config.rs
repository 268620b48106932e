//! # Directory Configuration
//!
//! Defaults are usable as-is; each field can be overridden from the
//! environment:
//!
//! | Variable | Field | Format |
//! |----------|-------|--------|
//! | `CD_SEED` | `store.seed` | `true`/`false` (also `1`/`0`, `yes`/`no`, `on`/`off`) |
//! | `CD_LATENCY_MS` | `store.latency_*_ms` | `min-max` or a single value |
//! | `CD_LOG` | `log.filter` | `tracing` env-filter directives |

use std::time::Duration;

use thiserror::Error;

pub const ENV_SEED: &str = "CD_SEED";
pub const ENV_LATENCY: &str = "CD_LATENCY_MS";
pub const ENV_LOG: &str = "CD_LOG";

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub store: StoreConfig,
    pub log: LogConfig,
}

impl DirectoryConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SEED) {
            config.store.seed = parse_flag(ENV_SEED, &raw)?;
        }
        if let Some(raw) = lookup(ENV_LATENCY) {
            let (min, max) = parse_range(ENV_LATENCY, &raw)?;
            config.store.latency_min_ms = min;
            config.store.latency_max_ms = max;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            config.log.filter = filter;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.latency_min_ms > self.store.latency_max_ms {
            return Err(ConfigError::InvertedLatency {
                min: self.store.latency_min_ms,
                max: self.store.latency_max_ms,
            });
        }
        Ok(())
    }
}

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Start with the sample roster instead of an empty store.
    pub seed: bool,
    /// Lower bound of the simulated per-call latency.
    pub latency_min_ms: u64,
    /// Upper bound of the simulated per-call latency. Zero disables it.
    pub latency_max_ms: u64,
}

impl StoreConfig {
    #[must_use]
    pub fn latency(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.latency_min_ms),
            Duration::from_millis(self.latency_max_ms),
        )
    }

    #[must_use]
    pub fn simulates_latency(&self) -> bool {
        self.latency_max_ms > 0
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: true,
            latency_min_ms: 0,
            latency_max_ms: 800,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Latency range is inverted: min {min}ms > max {max}ms")]
    InvertedLatency { min: u64, max: u64 },
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, raw)),
    }
}

fn parse_range(key: &'static str, raw: &str) -> Result<(u64, u64), ConfigError> {
    let parse = |part: &str| part.trim().parse::<u64>().map_err(|_| invalid(key, raw));
    match raw.split_once('-') {
        Some((min, max)) => Ok((parse(min)?, parse(max)?)),
        None => {
            let fixed = parse(raw)?;
            Ok((fixed, fixed))
        }
    }
}

fn invalid(key: &'static str, raw: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    }
}
