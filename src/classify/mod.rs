//! Record classification.
//!
//! This module locates a domain's SPF, DMARC and DKIM records and labels them:
//! - `find_spf`, `find_dmarc`, `find_dkim` - one TXT query each
//! - `classify_spf_policy`, `classify_dmarc_policy`, `classify_dkim_status` - pure labelling
//!
//! Lookups never fail from the caller's point of view. NXDOMAIN, empty
//! answers, timeouts and transport errors all collapse into an empty record
//! set, so "not found" is the only signal that reaches classification.

mod extract;
mod policy;

use log::debug;

use crate::dns::Resolver;
use crate::domain::{DomainName, Selector};

// Re-export public API
pub use extract::{select_dkim, select_dmarc, select_spf};
pub use policy::{
    classify_dkim_status, classify_dmarc_policy, classify_spf_policy, DkimStatus, DmarcPolicy,
    SpfPolicy,
};

/// Fetches the TXT strings published at `name`.
///
/// Any lookup error yields an empty set. There is no retry: one failed query
/// is final for the current assessment.
pub async fn fetch_txt<R: Resolver>(resolver: &R, name: &str) -> Vec<String> {
    match resolver.lookup_txt(name).await {
        Ok(records) => records,
        Err(e) => {
            debug!("No TXT records for {name}: {e}");
            Vec::new()
        }
    }
}

/// Looks up the SPF record published at `domain`.
pub async fn find_spf<R: Resolver>(resolver: &R, domain: &DomainName) -> Option<String> {
    select_spf(&fetch_txt(resolver, domain.as_str()).await)
}

/// Looks up the DMARC record published at `_dmarc.<domain>`.
pub async fn find_dmarc<R: Resolver>(resolver: &R, domain: &DomainName) -> Option<String> {
    select_dmarc(&fetch_txt(resolver, &domain.dmarc_name()).await)
}

/// Looks up the DKIM key record at `<selector>._domainkey.<domain>`.
///
/// Without a selector this returns `None` immediately and makes no query.
pub async fn find_dkim<R: Resolver>(
    resolver: &R,
    domain: &DomainName,
    selector: &Selector,
) -> Option<String> {
    let name = domain.dkim_name(selector)?;
    select_dkim(&fetch_txt(resolver, &name).await)
}

#[cfg(test)]
mod tests;
