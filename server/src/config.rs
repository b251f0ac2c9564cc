//! Server configuration parsed from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

use time::UtcOffset;
use time::macros::format_description;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid DASHBOARD_UTC_OFFSET '{0}' (expected [+|-]HH:MM)")]
    InvalidUtcOffset(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Offset used for the dashboard's refresh timestamp.
    pub utc_offset: UtcOffset,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DASHBOARD_UTC_OFFSET`: `[+|-]HH:MM`, `Z`, or `UTC`; default UTC
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let utc_offset = parse_utc_offset(std::env::var("DASHBOARD_UTC_OFFSET").ok().as_deref())?;
        Ok(Self { port, utc_offset })
    }

    /// Listen address on all interfaces. Also written into the Leptos
    /// options so the SSR site address matches the bound socket.
    #[must_use]
    pub fn site_addr(self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}

fn parse_utc_offset(raw: Option<&str>) -> Result<UtcOffset, ConfigError> {
    let raw = raw.map_or("", str::trim);
    if raw.is_empty() || raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Ok(UtcOffset::UTC);
    }
    UtcOffset::parse(raw, format_description!("[offset_hour sign:mandatory]:[offset_minute]"))
        .map_err(|_| ConfigError::InvalidUtcOffset(raw.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
