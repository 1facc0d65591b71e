//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;
use crate::error::{EngineError, EngineResult};

/// Installs the global fmt subscriber, writing to stderr so command output
/// on stdout stays clean.
///
/// `RUST_LOG` wins when set; otherwise `config.log_level` is used as the
/// filter directive.
pub fn init(config: &TelemetryConfig) -> EngineResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| EngineError::Telemetry {
            message: err.to_string(),
        })
}

fn build_filter(directive: &str) -> EngineResult<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|err| EngineError::Telemetry {
        message: format!("invalid log level/filter '{}': {}", directive, err),
    })
}
