//! CLI configuration (env-driven).
//!
//! Command-line flags take precedence over these values.

use anyhow::{Context, Result};
use idnumber::CenturyPivot;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact human-readable lines on stderr.
    #[default]
    Compact,
    /// One JSON object per line on stderr.
    Json,
}

/// idctl configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Pivot for expanding two-digit birth years.
    pub century_pivot: CenturyPivot,

    /// Default RNG seed for `generate`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
            century_pivot: CenturyPivot::DEFAULT,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("IDCTL_LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match lookup("IDCTL_LOG_FORMAT").as_deref() {
            None | Some("compact") => LogFormat::Compact,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!(
                "IDCTL_LOG_FORMAT must be 'compact' or 'json', got '{}'.",
                other
            ),
        };

        let century_pivot = lookup("IDCTL_CENTURY_PIVOT")
            .map(|v| v.parse::<u8>())
            .transpose()
            .context("IDCTL_CENTURY_PIVOT must be an integer between 0 and 100.")?
            .map(CenturyPivot::new)
            .unwrap_or(defaults.century_pivot);

        let seed = lookup("IDCTL_SEED")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("IDCTL_SEED must be an unsigned integer.")?;

        Ok(Self {
            log_level,
            log_format,
            century_pivot,
            seed,
        })
    }
}
