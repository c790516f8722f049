//! The resolver capability consumed by record classification.

use std::future::Future;
use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;

use super::records::{lookup_ns_records, lookup_txt_records};
use crate::error_handling::DnsLookupError;

/// Answers the two DNS questions an assessment needs.
///
/// Implementations own transport concerns (timeouts, attempts). Callers get
/// either the records or a categorized `DnsLookupError` and never retry.
pub trait Resolver: Send + Sync {
    /// TXT strings published at `name`, in resolver order.
    fn lookup_txt(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<String>, DnsLookupError>> + Send;

    /// Nameservers for `name`. Used only to check that the name resolves.
    fn lookup_ns(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<String>, DnsLookupError>> + Send;
}

/// Live DNS through `hickory-resolver`.
///
/// Cheap to clone; clones share the underlying resolver and its cache.
#[derive(Clone)]
pub struct HickoryAdapter {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryAdapter {
    /// Wraps an already-configured resolver.
    ///
    /// See `initialization::init_resolver` for the configuration used by the CLI.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

impl Resolver for HickoryAdapter {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsLookupError> {
        lookup_txt_records(name, &self.resolver).await
    }

    async fn lookup_ns(&self, name: &str) -> Result<Vec<String>, DnsLookupError> {
        lookup_ns_records(name, &self.resolver).await
    }
}
