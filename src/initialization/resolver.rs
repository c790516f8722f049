//! DNS resolver initialization.
//!
//! This module builds the live resolver adapter with the configured timeout
//! and attempt count.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::dns::HickoryAdapter;

/// Initializes the DNS resolver used for live assessments.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` on Unix) when it
/// can be read, and falls back to the default upstreams (Google DNS) otherwise.
/// Either way the timeout and attempt count come from the arguments, so every
/// query is bounded here and not by the classifier.
///
/// # Arguments
///
/// * `timeout_secs` - Per-query timeout in seconds
/// * `attempts` - Attempts per query
///
/// # Returns
///
/// A `HickoryAdapter` that can be shared across concurrent assessments.
pub fn init_resolver(timeout_secs: u64, attempts: usize) -> HickoryAdapter {
    let (config, mut opts) = match read_system_conf() {
        Ok((config, opts)) => (config, opts),
        Err(e) => {
            log::warn!("Could not read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(timeout_secs);
    opts.attempts = attempts;
    // Names are always fully qualified; never append search domains
    opts.ndots = 0;

    HickoryAdapter::new(Arc::new(TokioAsyncResolver::tokio(config, opts)))
}
