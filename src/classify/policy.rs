//! Policy classification for SPF, DMARC and DKIM records.
//!
//! Classification works on the raw record text by suffix and substring
//! matching, not by parsing the tag grammars. The precedence rules below are
//! what the risk table is calibrated against.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use super::extract::contains_ignore_case;
use crate::domain::Selector;

/// Default handling of unlisted senders, read from the trailing `all` mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum SpfPolicy {
    /// No SPF record
    #[strum(to_string = "Policy: not found")]
    NotFound,
    /// Ends in `-all`
    #[strum(to_string = "Policy: strict (-all)")]
    Strict,
    /// Ends in `~all`
    #[strum(to_string = "Policy: soft (~all)")]
    Soft,
    /// Ends in `?all`
    #[strum(to_string = "Policy: neutral (?all)")]
    Neutral,
    /// Ends in `+all` or a bare `all`
    #[strum(to_string = "Policy: allow-all (all)")]
    AllowAll,
    /// No recognizable trailing `all` mechanism
    #[strum(to_string = "Policy: unknown")]
    Unknown,
}

/// The `p=` policy of a DMARC record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum DmarcPolicy {
    /// No DMARC record
    #[strum(to_string = "Policy: not found")]
    NotFound,
    /// `p=reject`
    #[strum(to_string = "Policy: reject (p=reject)")]
    Reject,
    /// `p=quarantine`
    #[strum(to_string = "Policy: quarantine (p=quarantine)")]
    Quarantine,
    /// `p=none`, monitoring only
    #[strum(to_string = "Policy: none (p=none, monitoring only)")]
    None,
    /// No recognizable `p=` value
    #[strum(to_string = "Policy: unknown")]
    Unknown,
}

/// Outcome of the DKIM key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum DkimStatus {
    /// No selector was supplied, so nothing was looked up
    #[strum(to_string = "Selector not provided")]
    SelectorNotProvided,
    /// A `v=DKIM1` record exists for the selector
    #[strum(to_string = "Found")]
    Found,
    /// The selector was looked up and no DKIM record came back
    #[strum(to_string = "Not found")]
    NotFound,
}

/// Classifies an SPF record by its trailing `all` mechanism.
///
/// The record is trimmed and lowercased, then suffixes are checked in order:
/// `-all`, `~all`, `?all`, then `+all` or a bare `all`. An earlier token that
/// happens to contain `all` (`include:all.example.com`) never matters, only
/// the end of the record does. Empty or whitespace-only input is `NotFound`.
///
/// # Examples
///
/// ```
/// use mail_posture::classify::{classify_spf_policy, SpfPolicy};
///
/// assert_eq!(classify_spf_policy("v=spf1 include:all.example.com -all"), SpfPolicy::Strict);
/// assert_eq!(classify_spf_policy("v=spf1 mx"), SpfPolicy::Unknown);
/// ```
pub fn classify_spf_policy(record: &str) -> SpfPolicy {
    let spf = record.trim().to_lowercase();

    if spf.is_empty() {
        return SpfPolicy::NotFound;
    }

    if spf.ends_with("-all") {
        SpfPolicy::Strict
    } else if spf.ends_with("~all") {
        SpfPolicy::Soft
    } else if spf.ends_with("?all") {
        SpfPolicy::Neutral
    } else if spf.ends_with("+all") || spf.ends_with("all") {
        SpfPolicy::AllowAll
    } else {
        SpfPolicy::Unknown
    }
}

/// Classifies a DMARC record by its `p=` policy.
///
/// Searches case-insensitively for `p=reject`, then `p=quarantine`, then
/// `p=none`. The first hit in that priority order wins regardless of where it
/// sits in the record, so a malformed record carrying several `p=` tokens is
/// rated by its strictest one. Plain substring search also matches inside
/// other tags (`sp=none` reads as `p=none`).
pub fn classify_dmarc_policy(record: &str) -> DmarcPolicy {
    let dmarc = record.trim();

    if dmarc.is_empty() {
        return DmarcPolicy::NotFound;
    }

    if contains_ignore_case(dmarc, "p=reject") {
        DmarcPolicy::Reject
    } else if contains_ignore_case(dmarc, "p=quarantine") {
        DmarcPolicy::Quarantine
    } else if contains_ignore_case(dmarc, "p=none") {
        DmarcPolicy::None
    } else {
        DmarcPolicy::Unknown
    }
}

/// Derives the DKIM status from the lookup result and the selector.
///
/// The selector decides first: without one the status is always
/// `SelectorNotProvided`, whatever `record` holds.
pub fn classify_dkim_status(record: Option<&str>, selector: &Selector) -> DkimStatus {
    if !selector.is_provided() {
        DkimStatus::SelectorNotProvided
    } else if record.is_some() {
        DkimStatus::Found
    } else {
        DkimStatus::NotFound
    }
}
