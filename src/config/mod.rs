//! Scenario configuration drawn from the environment.
//!
//! goose owns the process command line (host, user count, hatch rate, run
//! time), so the knobs that shape the scenario itself are environment
//! variables with the `DEPOY_LOADTEST_` prefix.

use std::time::Duration;

use thiserror::Error;

pub mod profiles;

/// Request path hit by each simulated user iteration.
pub const DEFAULT_PATH: &str = "/test/";

/// Think-time bounds, in seconds, between iterations.
pub const DEFAULT_WAIT_MIN_SECS: f64 = 1.0;
pub const DEFAULT_WAIT_MAX_SECS: f64 = 2.0;

const PATH_VAR: &str = "DEPOY_LOADTEST_PATH";
const WAIT_MIN_VAR: &str = "DEPOY_LOADTEST_WAIT_MIN";
const WAIT_MAX_VAR: &str = "DEPOY_LOADTEST_WAIT_MAX";
const WEIGHT_VAR: &str = "DEPOY_LOADTEST_WEIGHT";
const PROFILE_VAR: &str = "DEPOY_LOADTEST_PROFILE";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("wait time lower bound {min}s exceeds upper bound {max}s")]
    WaitBoundsReversed { min: f64, max: f64 },
}

/// Shape of the load test scenario: what one simulated user does on each
/// iteration, and how long it thinks between iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    /// Request path, always beginning with `/`.
    pub path: String,
    /// Lower bound of the uniform random think-time.
    pub wait_min: Duration,
    /// Upper bound of the uniform random think-time.
    pub wait_max: Duration,
    /// Relative weight of the scenario, at least 1.
    pub weight: usize,
    /// Load profile name, resolved by [`profiles::get_load_profile`].
    pub profile: String,
}

impl ScenarioConfig {
    /// Read the scenario configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = match get(PATH_VAR) {
            Some(path) => parse_path(path)?,
            None => DEFAULT_PATH.to_string(),
        };

        let wait_min_secs = match get(WAIT_MIN_VAR) {
            Some(raw) => parse_wait_secs(WAIT_MIN_VAR, &raw)?,
            None => DEFAULT_WAIT_MIN_SECS,
        };
        let wait_max_secs = match get(WAIT_MAX_VAR) {
            Some(raw) => parse_wait_secs(WAIT_MAX_VAR, &raw)?,
            None => DEFAULT_WAIT_MAX_SECS,
        };
        if wait_min_secs > wait_max_secs {
            return Err(ConfigError::WaitBoundsReversed {
                min: wait_min_secs,
                max: wait_max_secs,
            });
        }

        let weight = match get(WEIGHT_VAR) {
            Some(raw) => parse_weight(&raw)?,
            None => 1,
        };

        let profile = get(PROFILE_VAR).unwrap_or_else(|| profiles::DEFAULT_PROFILE.to_string());

        Ok(Self {
            path,
            wait_min: Duration::from_secs_f64(wait_min_secs),
            wait_max: Duration::from_secs_f64(wait_max_secs),
            weight,
            profile,
        })
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None).expect("defaults are valid")
    }
}

fn parse_path(path: String) -> Result<String, ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::InvalidValue {
            var: PATH_VAR,
            value: path,
            reason: "request path must begin with '/'",
        });
    }
    Ok(path)
}

fn parse_wait_secs(var: &'static str, raw: &str) -> Result<f64, ConfigError> {
    let secs: f64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
        reason: "expected a number of seconds",
    })?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: "seconds must be finite and non-negative",
        });
    }
    // from_secs_f64 panics on out-of-range input
    if Duration::try_from_secs_f64(secs).is_err() {
        return Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: "seconds are too large to represent as a duration",
        });
    }
    Ok(secs)
}

fn parse_weight(raw: &str) -> Result<usize, ConfigError> {
    let weight: usize = raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: WEIGHT_VAR,
        value: raw.to_string(),
        reason: "expected a positive integer",
    })?;
    if weight == 0 {
        return Err(ConfigError::InvalidValue {
            var: WEIGHT_VAR,
            value: raw.to_string(),
            reason: "weight must be at least 1",
        });
    }
    Ok(weight)
}
