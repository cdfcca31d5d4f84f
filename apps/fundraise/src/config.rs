//! # Configuration
//!
//! Server settings read from the environment. Unset variables fall back to
//! defaults, which are logged; malformed values are an error.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `FUNDRAISE_HOST` | `0.0.0.0` |
//! | `PORT` | `5000` |
//! | `FUNDRAISE_MONTHLY_GOAL` | `5000` |
//! | `FUNDRAISE_CORS_ORIGINS` | empty (any origin) |

use fundraise_core::Amount;
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MONTHLY_GOAL: Amount = 5000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("monthly goal must be positive")]
    ZeroGoal,

    #[error("invalid listen address {0}")]
    Address(String),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub monthly_goal: Amount,
    /// Allowed CORS origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            monthly_goal: DEFAULT_MONTHLY_GOAL,
            cors_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            host: lookup("FUNDRAISE_HOST").unwrap_or_else(|| {
                info!("FUNDRAISE_HOST not set, using default: {DEFAULT_HOST}");
                DEFAULT_HOST.to_string()
            }),
            port: try_load(&lookup, "PORT", DEFAULT_PORT)?,
            monthly_goal: try_load(&lookup, "FUNDRAISE_MONTHLY_GOAL", DEFAULT_MONTHLY_GOAL)?,
            cors_origins: lookup("FUNDRAISE_CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Override host and port, e.g. from CLI flags.
    #[must_use]
    pub fn with_listen(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Override the monthly goal.
    pub fn with_monthly_goal(mut self, goal: Option<Amount>) -> Result<Self, ConfigError> {
        if let Some(goal) = goal {
            self.monthly_goal = goal;
        }
        self.validate()?;
        Ok(self)
    }

    /// The address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::Address(addr))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.monthly_goal == 0 {
            return Err(ConfigError::ZeroGoal);
        }
        Ok(())
    }
}

fn try_load<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(raw) => {
            debug!("{key}={raw}");
            raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            })
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
