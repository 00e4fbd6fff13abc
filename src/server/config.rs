//! Server Configuration
//!
//! All runtime parameters come from environment variables, read exactly
//! once at startup into an immutable [`ServerConfig`] that is passed by
//! value into application construction. A missing or malformed required
//! variable fails startup immediately rather than degrading at request
//! time.
//!
//! # Variables
//!
//! | Variable           | Required | Meaning                                   |
//! |--------------------|----------|-------------------------------------------|
//! | `BIND_ADDR`        | yes      | Socket address to listen on               |
//! | `DATABASE_URL`     | yes      | PostgreSQL connection string              |
//! | `AUTH_PEPPER`      | yes      | Secret mixed into every credential digest |
//! | `SESSION_TTL_SECS` | no       | Session lifetime, default 30 days         |

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Default session lifetime when `SESSION_TTL_SECS` is not set: 30 days.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Immutable server configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Secret pepper mixed into every credential digest. Shared across all
    /// users; there is no per-user salt.
    pub pepper: String,
    /// How long a session stays usable after creation.
    pub session_ttl: Duration,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is absent or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = require("BIND_ADDR")?
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let database_url = require("DATABASE_URL")?;
        let pepper = require("AUTH_PEPPER")?;

        let session_ttl = match std::env::var("SESSION_TTL_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    name: "SESSION_TTL_SECS",
                    reason: e.to_string(),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        };

        Ok(Self {
            bind_addr,
            database_url,
            pepper,
            session_ttl,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}
