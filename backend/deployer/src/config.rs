//! Application configuration loaded from environment variables.
//!
//! | Variable           | Default | Meaning                                    |
//! |--------------------|---------|--------------------------------------------|
//! | `STAKE_THRESHOLD`  | `1`     | Campaign threshold, decimal token amount   |
//! | `DATE`             | unset   | Absolute deadline (RFC 3339 or YYYY-MM-DD) |
//! | `SECONDS_FROM_NOW` | unset   | Relative deadline in seconds               |
//! | `DEPLOYMENT_FILE`  | unset   | Where to write the JSON deployment record  |

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate};
use tracing::warn;

use crate::amount::{parse_units, TOKEN_DECIMALS};
use crate::errors::{DeployError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Threshold in token base units; always positive.
    pub threshold: i128,
    /// Requested absolute deadline as a unix timestamp.
    pub date: Option<u64>,
    /// Requested deadline relative to deployment time.
    pub seconds_from_now: Option<u64>,
    pub deployment_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Empty values count as unset. A `DATE` or `SECONDS_FROM_NOW` that does
    /// not parse is logged and ignored so deadline resolution can fall back.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let threshold_text = var("STAKE_THRESHOLD").unwrap_or_else(|| "1".to_string());
        let threshold = parse_units(&threshold_text, TOKEN_DECIMALS)
            .map_err(|e| DeployError::Config(format!("Invalid STAKE_THRESHOLD: {e}")))?;
        if threshold <= 0 {
            return Err(DeployError::Config(
                "STAKE_THRESHOLD must be greater than zero".to_string(),
            ));
        }

        let date = var("DATE").and_then(|text| {
            let parsed = parse_date(&text);
            if parsed.is_none() {
                warn!("Ignoring unparseable DATE '{text}'");
            }
            parsed
        });

        let seconds_from_now = var("SECONDS_FROM_NOW").and_then(|text| {
            let parsed = text.trim().parse::<u64>().ok();
            if parsed.is_none() {
                warn!("Ignoring unparseable SECONDS_FROM_NOW '{text}'");
            }
            parsed
        });

        Ok(Config {
            threshold,
            date,
            seconds_from_now,
            deployment_file: var("DEPLOYMENT_FILE").map(PathBuf::from),
        })
    }
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (UTC midnight).
/// Dates before the unix epoch are rejected.
pub fn parse_date(text: &str) -> Option<u64> {
    let text = text.trim();
    let seconds = match DateTime::parse_from_rfc3339(text) {
        Ok(datetime) => datetime.timestamp(),
        Err(_) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)?
            .and_utc()
            .timestamp(),
    };
    u64::try_from(seconds).ok()
}
