//! Configuration type definitions
//!
//! Parsed from text by the driver crate; the core only defines the shape
//! and the defaults.

pub mod types;

pub use types::*;
