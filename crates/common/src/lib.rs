//! framekit Common Utilities
//!
//! Shared infrastructure for all framekit crates:
//! - Error types and result aliases
//! - Time sources and the per-frame clock
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
