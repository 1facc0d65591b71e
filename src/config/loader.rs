//! Rule loading functionality.
//!
//! This module provides the [`RulesLoader`] type for loading gratuity rules
//! from a YAML file in a configuration directory.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::GratuityRules;

/// The file name read from a rules directory.
pub const RULES_FILE_NAME: &str = "rules.yaml";

/// Loads and provides access to gratuity rules.
///
/// # Directory Structure
///
/// ```text
/// config/uae/
/// └── rules.yaml   # Statutory constants
/// ```
///
/// # Example
///
/// ```no_run
/// use gratuity_engine::config::RulesLoader;
///
/// let loader = RulesLoader::load("./config/uae").unwrap();
/// println!("Loaded rules: {}", loader.rules().metadata.name);
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader {
    rules: GratuityRules,
}

impl RulesLoader {
    /// Loads rules from `rules.yaml` in the specified directory.
    ///
    /// Returns an error if the file is missing, is not valid YAML, is
    /// missing a field, or describes an unusable scheme (see
    /// [`GratuityRules::validate`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rules_path = path.as_ref().join(RULES_FILE_NAME);
        let rules = Self::load_yaml::<GratuityRules>(&rules_path)?;
        rules.validate(&rules_path.display().to_string())?;
        Ok(Self { rules })
    }

    /// Wraps the built-in UAE rules.
    pub fn builtin() -> Self {
        Self {
            rules: GratuityRules::uae(),
        }
    }

    /// Loads rules from `path` when given, otherwise falls back to the
    /// built-in rules.
    pub fn load_or_builtin<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &GratuityRules {
        &self.rules
    }

    /// Consumes the loader, returning the rules.
    pub fn into_rules(self) -> GratuityRules {
        self.rules
    }
}
