//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (DNS timeouts, concurrency limits, etc.)
//! - Option types shared by the library and the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel, OutputFormat};
