//! Error handling and run statistics.
//!
//! This module provides:
//! - Error type definitions for each boundary (resolver, input, assessment, startup)
//! - Run statistics tracking (risk ratings and failed assessments)
//!
//! Absent records are not errors. A reachable domain with no SPF, DMARC or DKIM
//! record still produces an assessment; only input and pre-flight failures
//! surface as `AssessmentError`.

mod stats;
mod types;

// Re-export public API
pub use stats::RunStats;
pub use types::{
    AssessmentError, DnsLookupError, DomainError, FailureType, InitializationError,
};
