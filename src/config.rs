//! Process configuration.
//!
//! Which environment this process runs as is decided by external deployment
//! tooling and supplied through environment variables at start time; nothing
//! here encodes a deployment target.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

/// Environment variable naming the listen address.
const ENV_BIND_ADDR: &str = "KODIAK_BIND_ADDR";
/// Environment variable holding the webhook shared secret.
const ENV_WEBHOOK_SECRET: &str = "KODIAK_WEBHOOK_SECRET";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Errors raised while reading configuration. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// The listen address does not parse.
    #[error("invalid listen address {value:?} in {var}: {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Configuration for the ingestion process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// Shared secret for webhook signature verification.
    pub webhook_secret: Vec<u8>,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: ENV_BIND_ADDR,
                value: raw_addr,
                source,
            })?;

        let webhook_secret = env::var(ENV_WEBHOOK_SECRET)
            .map_err(|_| ConfigError::MissingVar(ENV_WEBHOOK_SECRET))?
            .into_bytes();

        Ok(Config {
            bind_addr,
            webhook_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment-variable tests mutate process state; keep them to parsing
    // logic that doesn't touch the real environment.

    #[test]
    fn default_bind_addr_parses() {
        let addr: SocketAddr = DEFAULT_BIND_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn invalid_addr_error_names_variable() {
        let err = "not-an-addr"
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: ENV_BIND_ADDR,
                value: "not-an-addr".to_string(),
                source,
            })
            .unwrap_err();
        assert!(err.to_string().contains("KODIAK_BIND_ADDR"));
    }
}
