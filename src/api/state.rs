//! Application state for the Gratuity Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::GratuityRules;

/// Shared application state.
///
/// Holds the rule set every calculation runs under. Rules are read-only
/// once the server starts.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<GratuityRules>,
}

impl AppState {
    /// Creates a new application state with the given rules.
    pub fn new(rules: GratuityRules) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Returns a reference to the rules.
    pub fn rules(&self) -> &GratuityRules {
        &self.rules
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GratuityRules::uae())
    }
}
