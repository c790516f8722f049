//! DNS record queries (NS, TXT) against `hickory-resolver`.
//!
//! Resolver errors are categorized into `DnsLookupError` here, at the adapter
//! boundary, so nothing above this module sees a `hickory` type.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::DnsLookupError;

/// Maps a resolver error onto the lookup error taxonomy.
///
/// NXDOMAIN, empty answers and server failures all arrive as `NoRecordsFound`
/// and are told apart by the response code. Only `NoError` means the name
/// exists without records of the requested type. Timeouts can surface either
/// as their own kind or wrapped in a protocol error, so the message is checked
/// as a fallback.
pub(crate) fn categorize_resolve_error(e: &ResolveError) -> DnsLookupError {
    match e.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NXDomain => DnsLookupError::NxDomain,
            ResponseCode::NoError => DnsLookupError::NoRecords,
            // SERVFAIL, REFUSED and friends say nothing about whether the name exists
            code => DnsLookupError::Other(format!("{e} ({code})")),
        },
        ResolveErrorKind::Timeout => DnsLookupError::Timeout,
        _ => {
            let error_msg = e.to_string();
            let lowered = error_msg.to_lowercase();
            if lowered.contains("timed out") || lowered.contains("timeout") {
                DnsLookupError::Timeout
            } else {
                DnsLookupError::Other(error_msg)
            }
        }
    }
}

fn log_lookup_failure(kind: &str, domain: &str, error: &DnsLookupError) {
    match error {
        // Expected for many names - not worth a warning
        DnsLookupError::NoRecords | DnsLookupError::NxDomain => {
            log::debug!("{kind} lookup for {domain}: {error}");
        }
        DnsLookupError::Timeout => {
            log::warn!("{kind} record lookup timed out for {domain}");
        }
        DnsLookupError::Other(_) => {
            log::warn!("Failed to lookup {kind} records for {domain}: {error}");
        }
    }
}

/// Queries NS (nameserver) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of nameserver hostnames.
///
/// # Errors
///
/// Returns the categorized `DnsLookupError` if the query fails.
pub async fn lookup_ns_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, DnsLookupError> {
    match resolver.lookup(domain, RecordType::NS).await {
        Ok(lookup) => {
            let nameservers: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::NS(ns) = rdata {
                        Some(ns.to_utf8())
                    } else {
                        None
                    }
                })
                .collect();
            Ok(nameservers)
        }
        Err(e) => {
            let error = categorize_resolve_error(&e);
            log_lookup_failure("NS", domain, &error);
            Err(error)
        }
    }
}

/// Queries TXT (text) records for a name.
///
/// Each TXT record can be split into several character-strings; they are
/// joined without a separator, and invalid UTF-8 is replaced lossily.
/// Records are returned in the order the resolver delivered them.
///
/// # Arguments
///
/// * `domain` - The name to query
/// * `resolver` - The DNS resolver instance
///
/// # Errors
///
/// Returns the categorized `DnsLookupError` if the query fails.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, DnsLookupError> {
    match resolver.lookup(domain, RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                .collect::<Vec<String>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            Ok(txt_records)
        }
        Err(e) => {
            let error = categorize_resolve_error(&e);
            log_lookup_failure("TXT", domain, &error);
            Err(error)
        }
    }
}
