//! Assetact Core Library
//!
//! This crate provides the domain models, error types, and output
//! configuration shared by the action engine: parameter sets, result
//! descriptors, and the sizing-policy selection rules.

pub mod config;
pub mod error;
pub mod params;

// Re-export commonly used types
pub use config::OutputConfig;
pub use error::ActionError;
pub use params::{ActionParameters, ActionResult, ResolvedDimensions, SizingPolicy};
