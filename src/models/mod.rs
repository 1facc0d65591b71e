//! Core data models for the Gratuity Engine.
//!
//! This module contains the input and result records exchanged with the
//! calculator.

mod gratuity_input;
mod gratuity_result;

pub use gratuity_input::GratuityInput;
pub use gratuity_result::{BreakdownLine, GratuityResult, LineKind};
