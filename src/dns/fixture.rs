//! Canned-answer resolver.
//!
//! Serves fixed TXT/NS answers from memory so classification and risk can be
//! exercised without a network. Every query is logged so callers can assert
//! exactly which names were looked up.

use std::collections::HashMap;
use std::sync::Mutex;

use super::resolver::Resolver;
use crate::error_handling::DnsLookupError;

/// Record type of a logged query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// TXT lookup
    Txt,
    /// NS lookup
    Ns,
}

/// In-memory resolver with builder-style setup.
///
/// Lookup rules, per name (case-insensitive, trailing dot ignored):
/// 1. a failure registered with `with_failure` is returned for both TXT and NS;
/// 2. otherwise configured records are returned;
/// 3. otherwise the lookup fails with `DnsLookupError::NoRecords`, which means
///    "name exists, nothing of that type" and passes the pre-flight check.
///
/// # Examples
///
/// ```
/// use mail_posture::dns::StaticResolver;
///
/// let resolver = StaticResolver::new()
///     .with_txt("example.com", ["v=spf1 -all"])
///     .with_txt("_dmarc.example.com", ["v=DMARC1; p=reject"]);
/// assert_eq!(resolver.query_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct StaticResolver {
    txt: HashMap<String, Vec<String>>,
    ns: HashMap<String, Vec<String>>,
    failures: HashMap<String, DnsLookupError>,
    queries: Mutex<Vec<(QueryKind, String)>>,
}

fn key(name: &str) -> String {
    name.trim_end_matches('.').to_lowercase()
}

impl StaticResolver {
    /// Resolver with no records; every name answers `NoRecords`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes TXT records at `name`, appended after any already configured.
    pub fn with_txt<I, S>(mut self, name: &str, records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.txt
            .entry(key(name))
            .or_default()
            .extend(records.into_iter().map(Into::into));
        self
    }

    /// Publishes NS records at `name`.
    pub fn with_ns<I, S>(mut self, name: &str, nameservers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ns
            .entry(key(name))
            .or_default()
            .extend(nameservers.into_iter().map(Into::into));
        self
    }

    /// Makes every lookup of `name` fail with `error`.
    pub fn with_failure(mut self, name: &str, error: DnsLookupError) -> Self {
        self.failures.insert(key(name), error);
        self
    }

    /// Every query made so far, in order.
    pub fn queries(&self) -> Vec<(QueryKind, String)> {
        self.queries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Names queried for TXT records, in order.
    pub fn txt_queries(&self) -> Vec<String> {
        self.queries()
            .into_iter()
            .filter(|(kind, _)| *kind == QueryKind::Txt)
            .map(|(_, name)| name)
            .collect()
    }

    /// Number of queries made so far.
    pub fn query_count(&self) -> usize {
        self.queries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn answer(&self, kind: QueryKind, name: &str) -> Result<Vec<String>, DnsLookupError> {
        let name = key(name);
        self.queries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((kind, name.clone()));

        if let Some(error) = self.failures.get(&name) {
            return Err(error.clone());
        }
        let records = match kind {
            QueryKind::Txt => self.txt.get(&name),
            QueryKind::Ns => self.ns.get(&name),
        };
        records.cloned().ok_or(DnsLookupError::NoRecords)
    }
}

impl Resolver for StaticResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsLookupError> {
        self.answer(QueryKind::Txt, name)
    }

    async fn lookup_ns(&self, name: &str) -> Result<Vec<String>, DnsLookupError> {
        self.answer(QueryKind::Ns, name)
    }
}
