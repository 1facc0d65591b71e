//! End-of-service Gratuity Engine
//!
//! This crate computes end-of-service gratuity under UAE labour-law rules
//! from a salary and a service period, and renders a breakdown of how the
//! total was reached.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod telemetry;
