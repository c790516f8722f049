//! Run driver helpers.
//!
//! This module provides input reading, progress logging and the end-of-run
//! statistics summary used by `run_assessments`.

pub mod input;
pub mod logging;
pub mod statistics;

// Re-export public API
pub use input::{collect_domains, parse_domain_lines};
pub use logging::log_progress;
pub use statistics::print_run_statistics;
