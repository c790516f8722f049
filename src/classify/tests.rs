//! Classification tests.

use super::*;
use crate::dns::StaticResolver;
use crate::error_handling::DnsLookupError;
use strum::IntoEnumIterator;

fn domain(name: &str) -> DomainName {
    DomainName::parse(name).expect("test domain should be valid")
}

fn records(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// SPF selection

#[test]
fn test_select_spf_first_match_wins() {
    let txt = records(&[
        "google-site-verification=abc",
        "v=spf1 include:_spf.example.com ~all",
        "v=spf1 -all",
    ]);
    assert_eq!(
        select_spf(&txt),
        Some("v=spf1 include:_spf.example.com ~all".to_string())
    );
}

#[test]
fn test_select_spf_case_insensitive() {
    let txt = records(&["V=SPF1 -ALL"]);
    assert_eq!(select_spf(&txt), Some("V=SPF1 -ALL".to_string()));
}

#[test]
fn test_select_spf_trims_result() {
    let txt = records(&["v=spf1 -all   "]);
    assert_eq!(select_spf(&txt), Some("v=spf1 -all".to_string()));
}

#[test]
fn test_select_spf_requires_prefix() {
    // Mentioning v=spf1 mid-record is not an SPF record
    let txt = records(&["note: v=spf1 -all", "v=spf10 -all"]);
    assert_eq!(select_spf(&txt[..1]), None);
    // "v=spf10" still starts with "v=spf1"; prefix match is all that is checked
    assert_eq!(select_spf(&txt[1..]), Some("v=spf10 -all".to_string()));
}

#[test]
fn test_select_spf_empty_set() {
    assert_eq!(select_spf(&[]), None);
}

#[test]
fn test_select_spf_multibyte_does_not_panic() {
    let txt = records(&["ééé", "日本"]);
    assert_eq!(select_spf(&txt), None);
}

// DMARC selection

#[test]
fn test_select_dmarc_case_insensitive() {
    let txt = records(&["v=dmarc1; p=reject"]);
    assert_eq!(select_dmarc(&txt), Some("v=dmarc1; p=reject".to_string()));
}

#[test]
fn test_select_dmarc_ignores_other_records() {
    let txt = records(&["v=spf1 -all", "some other text"]);
    assert_eq!(select_dmarc(&txt), None);
}

// DKIM selection

#[test]
fn test_select_dkim_unanchored() {
    let txt = records(&["k=rsa; v=DKIM1; p=MIGfMA0"]);
    assert_eq!(
        select_dkim(&txt),
        Some("k=rsa; v=DKIM1; p=MIGfMA0".to_string())
    );
}

#[test]
fn test_select_dkim_no_version_tag() {
    // A key record without the version tag does not count
    let txt = records(&["k=rsa; p=MIGfMA0"]);
    assert_eq!(select_dkim(&txt), None);
}

// SPF policy

#[test]
fn test_spf_policy_suffixes() {
    assert_eq!(classify_spf_policy("v=spf1 -all"), SpfPolicy::Strict);
    assert_eq!(classify_spf_policy("v=spf1 ~all"), SpfPolicy::Soft);
    assert_eq!(classify_spf_policy("v=spf1 ?all"), SpfPolicy::Neutral);
    assert_eq!(classify_spf_policy("v=spf1 +all"), SpfPolicy::AllowAll);
    assert_eq!(classify_spf_policy("v=spf1 all"), SpfPolicy::AllowAll);
}

#[test]
fn test_spf_policy_empty_is_not_found() {
    assert_eq!(classify_spf_policy(""), SpfPolicy::NotFound);
    assert_eq!(classify_spf_policy("   \t\n"), SpfPolicy::NotFound);
}

#[test]
fn test_spf_policy_strict_beats_earlier_all_token() {
    assert_eq!(
        classify_spf_policy("v=spf1 include:all.example.com -all"),
        SpfPolicy::Strict
    );
}

#[test]
fn test_spf_policy_case_and_whitespace() {
    assert_eq!(classify_spf_policy("  V=SPF1 MX -ALL  "), SpfPolicy::Strict);
    assert_eq!(classify_spf_policy("v=spf1 mx ~All\n"), SpfPolicy::Soft);
}

#[test]
fn test_spf_policy_without_space_before_qualifier() {
    assert_eq!(classify_spf_policy("v=spf1-all"), SpfPolicy::Strict);
}

#[test]
fn test_spf_policy_unknown() {
    assert_eq!(classify_spf_policy("v=spf1 mx"), SpfPolicy::Unknown);
    assert_eq!(
        classify_spf_policy("v=spf1 redirect=_spf.example.com"),
        SpfPolicy::Unknown
    );
    // The qualifier must be at the very end
    assert_eq!(
        classify_spf_policy("v=spf1 -all exp=explain.example.com"),
        SpfPolicy::Unknown
    );
}

#[test]
fn test_spf_policy_labels() {
    assert_eq!(SpfPolicy::Strict.to_string(), "Policy: strict (-all)");
    assert_eq!(SpfPolicy::Soft.to_string(), "Policy: soft (~all)");
    assert_eq!(SpfPolicy::Neutral.to_string(), "Policy: neutral (?all)");
    assert_eq!(SpfPolicy::AllowAll.to_string(), "Policy: allow-all (all)");
    assert_eq!(SpfPolicy::NotFound.to_string(), "Policy: not found");
    assert_eq!(SpfPolicy::Unknown.to_string(), "Policy: unknown");
}

// DMARC policy

#[test]
fn test_dmarc_policy_values() {
    assert_eq!(
        classify_dmarc_policy("v=DMARC1; p=reject"),
        DmarcPolicy::Reject
    );
    assert_eq!(
        classify_dmarc_policy("v=DMARC1; p=quarantine; pct=100"),
        DmarcPolicy::Quarantine
    );
    assert_eq!(
        classify_dmarc_policy("v=DMARC1; p=none; rua=mailto:d@example.com"),
        DmarcPolicy::None
    );
    assert_eq!(classify_dmarc_policy("v=DMARC1; rua=x"), DmarcPolicy::Unknown);
}

#[test]
fn test_dmarc_policy_empty_is_not_found() {
    assert_eq!(classify_dmarc_policy(""), DmarcPolicy::NotFound);
    assert_eq!(classify_dmarc_policy("  "), DmarcPolicy::NotFound);
}

#[test]
fn test_dmarc_policy_case_insensitive() {
    assert_eq!(
        classify_dmarc_policy("V=DMARC1; P=REJECT"),
        DmarcPolicy::Reject
    );
}

#[test]
fn test_dmarc_policy_priority_not_position() {
    // p=none appears first in the text, p=reject still wins
    assert_eq!(
        classify_dmarc_policy("v=DMARC1; p=none; p=reject"),
        DmarcPolicy::Reject
    );
    assert_eq!(
        classify_dmarc_policy("v=DMARC1; p=quarantine; p=reject"),
        DmarcPolicy::Reject
    );
    assert_eq!(
        classify_dmarc_policy("v=DMARC1; p=none; p=quarantine"),
        DmarcPolicy::Quarantine
    );
}

#[test]
fn test_dmarc_policy_substring_matches_subdomain_tag() {
    // Substring search, not tag parsing: sp=none reads as p=none
    assert_eq!(
        classify_dmarc_policy("v=DMARC1; sp=none"),
        DmarcPolicy::None
    );
    assert_eq!(
        classify_dmarc_policy("v=DMARC1; p=reject; sp=none"),
        DmarcPolicy::Reject
    );
}

#[test]
fn test_dmarc_policy_spaced_tag_is_unknown() {
    assert_eq!(
        classify_dmarc_policy("v=DMARC1; p = reject"),
        DmarcPolicy::Unknown
    );
}

// DKIM status

#[test]
fn test_dkim_status_table() {
    assert_eq!(
        classify_dkim_status(None, &Selector::new("")),
        DkimStatus::SelectorNotProvided
    );
    assert_eq!(
        classify_dkim_status(None, &Selector::new("sel1")),
        DkimStatus::NotFound
    );
    assert_eq!(
        classify_dkim_status(Some("v=DKIM1; k=rsa; p=MIGf"), &Selector::new("sel1")),
        DkimStatus::Found
    );
}

#[test]
fn test_dkim_status_selector_decides_first() {
    assert_eq!(
        classify_dkim_status(Some("v=DKIM1; k=rsa"), &Selector::none()),
        DkimStatus::SelectorNotProvided
    );
}

// Lookups through a resolver

#[tokio::test]
async fn test_fetch_txt_flattens_every_error() {
    let resolver = StaticResolver::new()
        .with_failure("nx.example.com", DnsLookupError::NxDomain)
        .with_failure("slow.example.com", DnsLookupError::Timeout)
        .with_failure("broken.example.com", DnsLookupError::Other("SERVFAIL".into()));

    assert!(fetch_txt(&resolver, "nx.example.com").await.is_empty());
    assert!(fetch_txt(&resolver, "slow.example.com").await.is_empty());
    assert!(fetch_txt(&resolver, "broken.example.com").await.is_empty());
    assert!(fetch_txt(&resolver, "missing.example.com").await.is_empty());
}

#[tokio::test]
async fn test_find_spf_single_query() {
    let resolver = StaticResolver::new().with_txt("example.com", ["v=spf1 -all"]);

    let spf = find_spf(&resolver, &domain("example.com")).await;
    assert_eq!(spf, Some("v=spf1 -all".to_string()));
    assert_eq!(resolver.txt_queries(), vec!["example.com"]);
}

#[tokio::test]
async fn test_find_dmarc_queries_dmarc_label() {
    let resolver =
        StaticResolver::new().with_txt("_dmarc.example.com", ["v=DMARC1; p=quarantine"]);

    let dmarc = find_dmarc(&resolver, &domain("example.com")).await;
    assert_eq!(dmarc, Some("v=DMARC1; p=quarantine".to_string()));
    assert_eq!(resolver.txt_queries(), vec!["_dmarc.example.com"]);
}

#[tokio::test]
async fn test_find_dmarc_ignores_record_at_apex() {
    // DMARC published at the domain itself is not where receivers look
    let resolver = StaticResolver::new().with_txt("example.com", ["v=DMARC1; p=reject"]);

    assert_eq!(find_dmarc(&resolver, &domain("example.com")).await, None);
}

#[tokio::test]
async fn test_find_dkim_without_selector_makes_no_query() {
    let resolver = StaticResolver::new();

    let dkim = find_dkim(&resolver, &domain("example.com"), &Selector::none()).await;
    assert_eq!(dkim, None);
    assert_eq!(resolver.query_count(), 0);
}

#[tokio::test]
async fn test_find_dkim_with_selector() {
    let resolver = StaticResolver::new()
        .with_txt("sel1._domainkey.example.com", ["v=DKIM1; k=rsa; p=MIGf"]);

    let dkim = find_dkim(&resolver, &domain("example.com"), &Selector::new("sel1")).await;
    assert_eq!(dkim, Some("v=DKIM1; k=rsa; p=MIGf".to_string()));
    assert_eq!(resolver.txt_queries(), vec!["sel1._domainkey.example.com"]);
}

#[tokio::test]
async fn test_find_dkim_timeout_is_absence() {
    let resolver = StaticResolver::new()
        .with_failure("sel1._domainkey.example.com", DnsLookupError::Timeout);

    let dkim = find_dkim(&resolver, &domain("example.com"), &Selector::new("sel1")).await;
    assert_eq!(dkim, None);
    assert_eq!(resolver.query_count(), 1);
}

#[test]
fn test_policy_serialization_names() {
    assert_eq!(
        serde_json::to_string(&SpfPolicy::AllowAll).unwrap(),
        "\"allow_all\""
    );
    assert_eq!(
        serde_json::to_string(&DmarcPolicy::None).unwrap(),
        "\"none\""
    );
    assert_eq!(
        serde_json::to_string(&DkimStatus::SelectorNotProvided).unwrap(),
        "\"selector_not_provided\""
    );
}

#[test]
fn test_every_policy_has_a_label() {
    for policy in SpfPolicy::iter() {
        assert!(policy.to_string().starts_with("Policy: "));
    }
    for policy in DmarcPolicy::iter() {
        assert!(policy.to_string().starts_with("Policy: "));
    }
    for status in DkimStatus::iter() {
        assert!(!status.to_string().is_empty());
    }
}

// Property-based tests using proptest
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_spf_policy_is_total(record in "\\PC{0,120}") {
        // Must not panic; any output is one of the six variants by construction
        let policy = classify_spf_policy(&record);
        if record.trim().is_empty() {
            prop_assert_eq!(policy, SpfPolicy::NotFound);
        } else {
            prop_assert_ne!(policy, SpfPolicy::NotFound);
        }
    }

    #[test]
    fn test_spf_policy_whitespace_only_is_not_found(record in "[ \\t\\r\\n]{0,20}") {
        prop_assert_eq!(classify_spf_policy(&record), SpfPolicy::NotFound);
    }

    #[test]
    fn test_spf_strict_suffix_always_strict(
        mechanisms in prop::collection::vec("[a-z0-9:._+~?-]{1,20}", 0..6)
    ) {
        let record = format!("v=spf1 {} -all", mechanisms.join(" "));
        prop_assert_eq!(classify_spf_policy(&record), SpfPolicy::Strict);
    }

    #[test]
    fn test_dmarc_reject_always_wins(
        before in "[a-z=; ]{0,30}",
        after in "[a-z=; ]{0,30}"
    ) {
        let record = format!("v=DMARC1; {}p=reject{}", before, after);
        prop_assert_eq!(classify_dmarc_policy(&record), DmarcPolicy::Reject);
    }
}
