//! Configuration constants.
//!
//! This module defines the operational parameters used throughout the application:
//! DNS timeouts, concurrency limits, and the DNS label conventions used to build
//! lookup names.

// DNS resolution
/// DNS query timeout in seconds.
/// Most queries complete in well under a second; 3s fails fast on unresponsive servers.
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts the resolver makes per query before giving up.
/// This is the resolver's own transport retry; classification never retries a failed lookup.
pub const DNS_ATTEMPTS: usize = 2;

// Concurrency
/// Maximum number of domains assessed at the same time.
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;
/// Upper bound accepted for `--max-concurrency`.
pub const MAX_CONCURRENCY_LIMIT: usize = 500;

// Input limits
/// Maximum length of a domain name in characters (RFC 1035 presentation limit).
pub const MAX_DOMAIN_LENGTH: usize = 253;

// Lookup name conventions
/// Label prepended to a domain to find its DMARC record.
pub const DMARC_LABEL: &str = "_dmarc";
/// Label placed between the selector and the domain to find a DKIM key record.
pub const DKIM_LABEL: &str = "_domainkey";

// Record version tags (compared case-insensitively)
/// Prefix identifying an SPF record.
pub const SPF_VERSION_TAG: &str = "v=spf1";
/// Prefix identifying a DMARC record.
pub const DMARC_VERSION_TAG: &str = "v=dmarc1";
/// Tag identifying a DKIM key record (may appear anywhere in the record).
pub const DKIM_VERSION_TAG: &str = "v=dkim1";

// Reporting
/// Text shown in reports for a record that was not found.
pub const NOT_FOUND_LABEL: &str = "not found";
/// Interval (in completed assessments) between progress log lines.
pub const LOGGING_INTERVAL: usize = 25;
