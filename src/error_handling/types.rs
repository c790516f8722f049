//! Error type definitions.
//!
//! This module defines the error types used at each boundary of the application:
//! resolver transport errors, input validation errors, assessment errors and
//! initialization errors.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Configuration values out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failure of a single DNS query, as reported by a resolver adapter.
///
/// Only the pre-flight reachability check looks at the variant. Record lookups
/// treat every variant as "no records".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsLookupError {
    /// The queried name does not exist.
    #[error("domain does not exist (NXDOMAIN)")]
    NxDomain,

    /// The name exists but has no records of the requested type.
    #[error("no records found")]
    NoRecords,

    /// The query did not complete within the resolver's timeout.
    #[error("lookup timed out")]
    Timeout,

    /// Any other transport or protocol failure.
    #[error("DNS lookup failed: {0}")]
    Other(String),
}

/// Rejected domain input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Nothing left after trimming and stripping the scheme.
    #[error("Please enter a domain.")]
    Empty,

    /// Missing a dot, or starting/ending with one.
    #[error("Please enter a valid domain (e.g. example.com).")]
    Invalid,

    /// Longer than a DNS name can be.
    #[error("Domain is too long ({0} characters).")]
    TooLong(usize),
}

/// Reasons an assessment could not be produced.
///
/// Missing records are never an error; they drive the risk rating instead.
/// These variants cover input that cannot be looked up and domains that fail
/// the pre-flight nameserver check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// The raw domain input was rejected.
    #[error(transparent)]
    InvalidDomain(#[from] DomainError),

    /// The domain does not exist.
    #[error("Domain does not exist (NXDOMAIN).")]
    NotResolvable,

    /// The pre-flight lookup timed out.
    #[error("DNS lookup timed out. Try again.")]
    TimedOut,

    /// The pre-flight lookup failed for another reason.
    #[error("DNS lookup failed. Please try another domain.")]
    LookupFailed,
}

impl AssessmentError {
    /// Returns the statistics bucket for this error.
    pub fn failure_type(&self) -> FailureType {
        match self {
            AssessmentError::InvalidDomain(_) => FailureType::InvalidDomain,
            AssessmentError::NotResolvable => FailureType::NotResolvable,
            AssessmentError::TimedOut => FailureType::TimedOut,
            AssessmentError::LookupFailed => FailureType::LookupFailed,
        }
    }
}

/// Categories of failed assessments, tracked in run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureType {
    /// Input was not a usable domain name
    InvalidDomain,
    /// NXDOMAIN on the pre-flight check
    NotResolvable,
    /// Pre-flight check timed out
    TimedOut,
    /// Pre-flight check failed for another reason
    LookupFailed,
}

impl std::fmt::Display for FailureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureType {
    /// Human-readable label used in the run summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureType::InvalidDomain => "Invalid domain input",
            FailureType::NotResolvable => "Domain not resolvable",
            FailureType::TimedOut => "DNS lookup timed out",
            FailureType::LookupFailed => "DNS lookup failed",
        }
    }
}
