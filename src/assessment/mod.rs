//! Domain assessment.
//!
//! Runs the full pipeline for one domain: pre-flight NS check, record lookup
//! and classification, then the risk rating. The result is a plain value that
//! the report renderers consume.

mod preflight;

use log::debug;
use serde::Serialize;

use crate::classify::{
    classify_dkim_status, classify_dmarc_policy, classify_spf_policy, find_dkim, find_dmarc,
    find_spf, DkimStatus, DmarcPolicy, SpfPolicy,
};
use crate::dns::Resolver;
use crate::domain::{DomainName, Selector};
use crate::error_handling::AssessmentError;
use crate::risk::{assess_risk, RiskRating};

pub use preflight::{check_reachability, NsStatus};

/// The email-authentication posture of one domain.
///
/// Record fields hold the raw record text, or `None` when no record was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Normalized domain that was assessed
    pub domain: DomainName,
    /// DKIM selector used (empty when not provided)
    pub selector: Selector,
    /// SPF record text
    pub spf: Option<String>,
    /// SPF policy
    pub spf_policy: SpfPolicy,
    /// DMARC record text
    pub dmarc: Option<String>,
    /// DMARC policy
    pub dmarc_policy: DmarcPolicy,
    /// DKIM key record text
    pub dkim: Option<String>,
    /// DKIM status
    pub dkim_status: DkimStatus,
    /// Overall risk rating
    pub risk: RiskRating,
}

impl Assessment {
    /// Classifies already-fetched records and rates them.
    ///
    /// No lookups happen here; this is the pure half of [`assess_domain`].
    pub fn from_records(
        domain: DomainName,
        selector: Selector,
        spf: Option<String>,
        dmarc: Option<String>,
        dkim: Option<String>,
    ) -> Self {
        let spf_policy = classify_spf_policy(spf.as_deref().unwrap_or_default());
        let dmarc_policy = classify_dmarc_policy(dmarc.as_deref().unwrap_or_default());
        let dkim_status = classify_dkim_status(dkim.as_deref(), &selector);
        let risk = assess_risk(
            spf_policy,
            dmarc_policy,
            spf.is_some(),
            dkim_status,
            selector.is_provided(),
        );

        Assessment {
            domain,
            selector,
            spf,
            spf_policy,
            dmarc,
            dmarc_policy,
            dkim,
            dkim_status,
            risk,
        }
    }
}

/// Assesses a validated domain.
///
/// Issues one NS query, then one TXT query each for SPF and DMARC, and one for
/// DKIM when a selector is given. Missing records are part of the result, not
/// errors.
///
/// # Errors
///
/// Returns `NotResolvable`, `TimedOut` or `LookupFailed` when the pre-flight
/// NS check fails. No TXT queries are made in that case.
pub async fn assess_domain<R: Resolver>(
    resolver: &R,
    domain: DomainName,
    selector: Selector,
) -> Result<Assessment, AssessmentError> {
    check_reachability(resolver, &domain).await.into_result()?;

    let spf = find_spf(resolver, &domain).await;
    let dmarc = find_dmarc(resolver, &domain).await;
    let dkim = find_dkim(resolver, &domain, &selector).await;

    let assessment = Assessment::from_records(domain, selector, spf, dmarc, dkim);
    debug!(
        "Assessed {}: spf={:?} dmarc={:?} dkim={:?} risk={}",
        assessment.domain,
        assessment.spf_policy,
        assessment.dmarc_policy,
        assessment.dkim_status,
        assessment.risk
    );
    Ok(assessment)
}

/// Assesses raw caller input (a domain or `http(s)://` URL, and a selector).
///
/// # Errors
///
/// Returns `InvalidDomain` for unusable input, otherwise as [`assess_domain`].
pub async fn assess_input<R: Resolver>(
    resolver: &R,
    raw_domain: &str,
    raw_selector: &str,
) -> Result<Assessment, AssessmentError> {
    let domain = DomainName::parse(raw_domain)?;
    assess_domain(resolver, domain, Selector::new(raw_selector)).await
}
