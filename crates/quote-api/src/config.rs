//! Server settings read from the environment.

use quote_types::{env_or, ConfigError, RequestLimits};
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    pub limits: RequestLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 5000)),
            limits: RequestLimits::default(),
        }
    }
}

impl ServerConfig {
    /// `QUOTES_LISTEN`, `QUOTES_MAX_PER_REQUEST`, `QUOTES_MAX_FIELD_CHARS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            listen: env_or("QUOTES_LISTEN", defaults.listen)?,
            limits: RequestLimits {
                max_quotes_per_request: env_or(
                    "QUOTES_MAX_PER_REQUEST",
                    defaults.limits.max_quotes_per_request,
                )?,
                max_field_chars: env_or("QUOTES_MAX_FIELD_CHARS", defaults.limits.max_field_chars)?,
            },
        })
    }
}
