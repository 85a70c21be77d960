//! Stream processing configuration
//!
//! ```
//! use windowstats::config::StatisticsConfig;
//!
//! let config = StatisticsConfig::from_toml_str(
//!     r#"
//!     slidingWindowLength = 50
//!     slidingFactor = 5
//!     statistics = ["mean", "median", "99%_ile"]
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.sliding_window_length, 50);
//! assert_eq!(config.validate().unwrap().len(), 3);
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::statistics::{Statistic, StatisticRequest};
use crate::traits::StatsError;

/// Default number of samples per window
pub const DEFAULT_WINDOW_LENGTH: usize = 100;

/// Default emission interval, in inserts
pub const DEFAULT_SLIDING_FACTOR: usize = 1;

/// Error loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for '{field}': {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
    #[error(transparent)]
    Statistic(#[from] StatsError),
}

/// Settings for a [`StreamRouter`](crate::router::StreamRouter)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct StatisticsConfig {
    /// Samples kept per stream
    pub sliding_window_length: usize,
    /// Evaluate every N-th insert into a stream
    pub sliding_factor: usize,
    /// Statistic names to evaluate
    pub statistics: Vec<String>,
    /// Upper bound on live streams; unbounded when unset
    pub max_streams: Option<usize>,
    /// Namespace elements prepended to emitted records
    pub namespace_prefix: Vec<String>,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            sliding_window_length: DEFAULT_WINDOW_LENGTH,
            sliding_factor: DEFAULT_SLIDING_FACTOR,
            statistics: Statistic::vocabulary()
                .iter()
                .map(ToString::to_string)
                .collect(),
            max_streams: None,
            namespace_prefix: vec!["statistics".to_string()],
        }
    }
}

impl StatisticsConfig {
    /// Parse from TOML text; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check bounds and parse the statistic names
    ///
    /// Percentiles outside `[0, 100]` are rejected here, so a router built
    /// from a validated configuration never fails evaluation on them.
    pub fn validate(&self) -> Result<StatisticRequest, ConfigError> {
        if self.sliding_window_length < 1 {
            return Err(ConfigError::Invalid {
                field: "slidingWindowLength",
                message: "must be at least 1".to_string(),
            });
        }
        if self.sliding_factor < 1 {
            return Err(ConfigError::Invalid {
                field: "slidingFactor",
                message: "must be at least 1".to_string(),
            });
        }
        if self.sliding_factor > self.sliding_window_length {
            return Err(ConfigError::Invalid {
                field: "slidingFactor",
                message: format!(
                    "{} exceeds slidingWindowLength {}",
                    self.sliding_factor, self.sliding_window_length
                ),
            });
        }
        if self.max_streams == Some(0) {
            return Err(ConfigError::Invalid {
                field: "maxStreams",
                message: "must be at least 1".to_string(),
            });
        }
        if self.statistics.is_empty() {
            return Err(ConfigError::Invalid {
                field: "statistics",
                message: "no statistics requested".to_string(),
            });
        }

        let request = StatisticRequest::parse(&self.statistics)?;
        for stat in request.statistics() {
            if let Statistic::Percentile(p) = stat {
                if !(0.0..=100.0).contains(&p.0) {
                    log::warn!("rejecting statistic {}", stat);
                    return Err(StatsError::InvalidPercentile(p.0).into());
                }
            }
        }
        Ok(request)
    }
}
