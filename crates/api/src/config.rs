use std::net::SocketAddr;

use thiserror::Error;

/// Environment variable holding the listen address.
pub const BIND_ENV: &str = "ECOSPROUT_BIND";

pub const DEFAULT_BIND: &str = "0.0.0.0:3001";

/// Path prefix the routes are mounted under.
pub const API_PREFIX: &str = "/api";

#[derive(Debug, Error)]
#[error("invalid bind address '{addr}': {source}")]
pub struct BindAddrError {
    addr: String,
    source: std::net::AddrParseError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl ServerConfig {
    pub fn parse(addr: &str) -> Result<Self, BindAddrError> {
        let bind = addr.parse().map_err(|source| BindAddrError {
            addr: addr.to_string(),
            source,
        })?;
        Ok(Self { bind })
    }

    pub fn from_env() -> Result<Self, BindAddrError> {
        let addr = std::env::var(BIND_ENV).unwrap_or_else(|_| DEFAULT_BIND.to_string());
        Self::parse(&addr)
    }
}
