//! Risk rating.
//!
//! Combines the classified SPF, DMARC and DKIM results into a single coarse
//! rating. The rating is this tool's own summary, not a standard metric.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::classify::{DkimStatus, DmarcPolicy, SpfPolicy};

/// Coarse email-authentication risk.
///
/// Ordered from best to worst, so `max()` over a set of ratings gives the
/// worst one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumIter,
)]
pub enum RiskRating {
    /// Strict SPF, rejecting DMARC, and DKIM confirmed when a selector was given
    Low,
    /// Partially protected
    Medium,
    /// No enforceable DMARC policy, or no SPF record
    High,
}

/// Rates a domain from its classified records.
///
/// Rules are checked top to bottom and the first match wins:
///
/// | # | Condition | Result |
/// |---|---|---|
/// | 1 | DMARC policy is `Unknown`, `NotFound` or `None` | High |
/// | 2 | no SPF record | High |
/// | 3 | selector given, and not (Strict SPF, Reject DMARC, DKIM Found) | Medium |
/// | 4 | selector given, Strict SPF, Reject DMARC, DKIM Found | Low |
/// | 5 | no selector, Strict SPF, Reject DMARC | Low |
/// | 6 | otherwise | Medium |
///
/// A monitoring-only DMARC record (`p=none`) rates the same as no record at
/// all. DKIM only counts when a selector was supplied.
///
/// # Examples
///
/// ```
/// use mail_posture::classify::{DkimStatus, DmarcPolicy, SpfPolicy};
/// use mail_posture::risk::{assess_risk, RiskRating};
///
/// let rating = assess_risk(
///     SpfPolicy::Strict,
///     DmarcPolicy::Reject,
///     true,
///     DkimStatus::SelectorNotProvided,
///     false,
/// );
/// assert_eq!(rating, RiskRating::Low);
/// ```
pub fn assess_risk(
    spf_policy: SpfPolicy,
    dmarc_policy: DmarcPolicy,
    spf_present: bool,
    dkim_status: DkimStatus,
    selector_provided: bool,
) -> RiskRating {
    if matches!(
        dmarc_policy,
        DmarcPolicy::Unknown | DmarcPolicy::NotFound | DmarcPolicy::None
    ) {
        return RiskRating::High;
    }

    if !spf_present {
        return RiskRating::High;
    }

    let strict_and_rejecting =
        spf_policy == SpfPolicy::Strict && dmarc_policy == DmarcPolicy::Reject;

    if selector_provided {
        if strict_and_rejecting && dkim_status == DkimStatus::Found {
            return RiskRating::Low;
        }
        return RiskRating::Medium;
    }

    if strict_and_rejecting {
        return RiskRating::Low;
    }

    RiskRating::Medium
}
