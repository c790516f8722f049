//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DNS_ATTEMPTS, DNS_TIMEOUT_SECS, MAX_CONCURRENCY_LIMIT,
};
use crate::error_handling::InitializationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How each assessment is written to the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-layout plain-text report, one block per domain
    Text,
    /// One JSON object per line
    Jsonl,
}

/// Exit-code policy based on the worst posture observed in a run.
///
/// Lets scripts and CI jobs fail when a domain is rated at or above a threshold.
/// Domains that could not be assessed at all (not resolvable, lookup failure)
/// trip every threshold except `Never`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the run completes (default)
    Never,
    /// Exit non-zero if any domain is rated High
    High,
    /// Exit non-zero if any domain is rated Medium or High
    Medium,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use mail_posture::Config;
///
/// let config = Config {
///     domains: vec!["example.com".to_string()],
///     selector: "google".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domains given directly (URLs with an http/https scheme are accepted)
    pub domains: Vec<String>,

    /// File to read additional domains from, one per line (`-` for stdin)
    pub file: Option<PathBuf>,

    /// DKIM selector applied to every domain (empty = not provided)
    pub selector: String,

    /// Output format for assessments
    pub output_format: OutputFormat,

    /// Output file (stdout when not set)
    pub output: Option<PathBuf>,

    /// Maximum concurrent assessments
    pub max_concurrency: usize,

    /// Per-query DNS timeout in seconds
    pub dns_timeout_secs: u64,

    /// DNS attempts per query
    pub dns_attempts: usize,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Exit-code policy
    pub fail_on: FailOn,
}

impl Config {
    /// Checks option values that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::InvalidConfig` if concurrency or DNS settings
    /// are out of range.
    pub fn validate(&self) -> Result<(), InitializationError> {
        if self.max_concurrency == 0 || self.max_concurrency > MAX_CONCURRENCY_LIMIT {
            return Err(InitializationError::InvalidConfig(format!(
                "max_concurrency must be between 1 and {MAX_CONCURRENCY_LIMIT}, got {}",
                self.max_concurrency
            )));
        }
        if self.dns_timeout_secs == 0 {
            return Err(InitializationError::InvalidConfig(
                "dns_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.dns_attempts == 0 {
            return Err(InitializationError::InvalidConfig(
                "dns_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            file: None,
            selector: String::new(),
            output_format: OutputFormat::Text,
            output: None,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            dns_attempts: DNS_ATTEMPTS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
        }
    }
}
