//! Record extraction from TXT record sets.
//!
//! These functions pick the SPF, DMARC or DKIM record out of the TXT strings
//! published at one name. Selection is first match in resolver order; duplicate
//! records are not merged.

use crate::config::{DKIM_VERSION_TAG, DMARC_VERSION_TAG, SPF_VERSION_TAG};

/// ASCII case-insensitive prefix test that never panics on char boundaries.
pub(crate) fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Case-insensitive substring test. `needle` must already be lowercase.
pub(crate) fn contains_ignore_case(value: &str, needle: &str) -> bool {
    value.to_lowercase().contains(needle)
}

/// Extracts the SPF record from TXT records.
///
/// SPF records start with `v=spf1` (any case).
///
/// # Arguments
///
/// * `txt_records` - TXT record strings published at the domain
///
/// # Returns
///
/// The first SPF record found (trimmed), or `None` if no SPF record exists.
pub fn select_spf(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| starts_with_ignore_case(txt, SPF_VERSION_TAG))
        .map(|s| s.trim().to_string())
}

/// Extracts the DMARC record from TXT records.
///
/// DMARC records live at `_dmarc.<domain>` and start with `v=DMARC1` (any case).
///
/// # Arguments
///
/// * `txt_records` - TXT record strings published at `_dmarc.<domain>`
///
/// # Returns
///
/// The first DMARC record found (trimmed), or `None` if no DMARC record exists.
pub fn select_dmarc(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| starts_with_ignore_case(txt, DMARC_VERSION_TAG))
        .map(|s| s.trim().to_string())
}

/// Extracts the DKIM key record from TXT records.
///
/// Unlike SPF and DMARC the version tag is not anchored: any record containing
/// `v=DKIM1` (any case) matches.
pub fn select_dkim(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| contains_ignore_case(txt, DKIM_VERSION_TAG))
        .map(|s| s.trim().to_string())
}
