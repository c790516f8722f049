//! Pre-flight reachability check.

use serde::Serialize;
use strum_macros::Display;

use crate::dns::Resolver;
use crate::domain::DomainName;
use crate::error_handling::{AssessmentError, DnsLookupError};

/// Whether a domain resolves at all, from a single NS query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum NsStatus {
    /// The name exists (with or without its own NS records)
    #[strum(to_string = "ok")]
    Ok,
    /// NXDOMAIN
    #[strum(to_string = "nxdomain")]
    NxDomain,
    /// The query timed out
    #[strum(to_string = "timeout")]
    Timeout,
    /// Any other failure
    #[strum(to_string = "error")]
    Error,
}

impl NsStatus {
    /// Maps a non-`Ok` status onto the error that stops the assessment.
    pub fn into_result(self) -> Result<(), AssessmentError> {
        match self {
            NsStatus::Ok => Ok(()),
            NsStatus::NxDomain => Err(AssessmentError::NotResolvable),
            NsStatus::Timeout => Err(AssessmentError::TimedOut),
            NsStatus::Error => Err(AssessmentError::LookupFailed),
        }
    }
}

/// Checks that `domain` resolves before any record is classified.
///
/// A subdomain such as `mail.example.com` usually has no NS records of its
/// own; an empty answer still proves the name exists, so it counts as `Ok`.
pub async fn check_reachability<R: Resolver>(resolver: &R, domain: &DomainName) -> NsStatus {
    match resolver.lookup_ns(domain.as_str()).await {
        Ok(_) | Err(DnsLookupError::NoRecords) => NsStatus::Ok,
        Err(DnsLookupError::NxDomain) => NsStatus::NxDomain,
        Err(DnsLookupError::Timeout) => NsStatus::Timeout,
        Err(DnsLookupError::Other(msg)) => {
            log::debug!("NS pre-flight for {domain} failed: {msg}");
            NsStatus::Error
        }
    }
}
