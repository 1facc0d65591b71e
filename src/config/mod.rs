//! Configuration loading and management for the Gratuity Engine.
//!
//! This module provides the statutory rule set used by the calculator,
//! loadable from YAML, and the process settings read from the environment.
//!
//! # Example
//!
//! ```no_run
//! use gratuity_engine::config::RulesLoader;
//!
//! let loader = RulesLoader::load("./config/uae").unwrap();
//! println!("Loaded rules: {}", loader.rules().metadata.name);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::{RULES_FILE_NAME, RulesLoader};
pub use settings::{
    AppConfig, HOST_VAR, LOG_LEVEL_VAR, PORT_VAR, RULES_DIR_VAR, ServerConfig, TelemetryConfig,
};
pub use types::{
    GratuityRules, RulesMetadata, UAE_CAP_MONTHS, UAE_DAYS_PER_MONTH, UAE_FIRST_TIER_DAYS_PER_YEAR,
    UAE_FIRST_TIER_YEARS, UAE_MINIMUM_SERVICE_YEARS, UAE_SUBSEQUENT_DAYS_PER_YEAR,
};
