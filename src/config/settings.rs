//! Process settings read from the environment.
//!
//! [`AppConfig::load`] reads an optional `.env` file and then the
//! `GRATUITY_*` variables. Tests build configs through
//! [`AppConfig::from_lookup`] so they never touch the process environment.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Environment variable holding the bind host.
pub const HOST_VAR: &str = "GRATUITY_HOST";
/// Environment variable holding the bind port.
pub const PORT_VAR: &str = "GRATUITY_PORT";
/// Environment variable holding the default log filter.
pub const LOG_LEVEL_VAR: &str = "GRATUITY_LOG_LEVEL";
/// Environment variable pointing at a rules directory.
pub const RULES_DIR_VAR: &str = "GRATUITY_RULES_DIR";

/// Top-level configuration for the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server binding.
    pub server: ServerConfig,
    /// Tracing controls.
    pub telemetry: TelemetryConfig,
    /// Directory containing `rules.yaml`; the built-in rules apply when unset.
    pub rules_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads settings from the environment.
    pub fn load() -> EngineResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR).unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| EngineError::InvalidSetting {
                    key: PORT_VAR.to_string(),
                    message: format!("'{}' is not a valid u16", raw),
                })?,
            None => 3000,
        };
        let log_level = lookup(LOG_LEVEL_VAR).unwrap_or_else(|| "info".to_string());
        let rules_dir = lookup(RULES_DIR_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            rules_dir,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host name or IP address.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl ServerConfig {
    /// Resolves the configured host and port into a socket address.
    pub fn socket_addr(&self) -> EngineResult<SocketAddr> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| EngineError::InvalidSetting {
                key: HOST_VAR.to_string(),
                message: format!("'{}' is not an IPv4 or IPv6 address", self.host),
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_level: String,
}
