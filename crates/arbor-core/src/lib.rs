//! Core types and utilities for the arbor tree visualizer.
//!
//! This crate provides the foundational types used across all other arbor
//! crates:
//! - Grid coordinate and color value types
//! - Label formatting configuration
//! - Error types

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
