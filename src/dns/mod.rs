//! DNS resolution for record classification.
//!
//! This module provides the resolver capability the classifier is written against:
//! - The `Resolver` trait (TXT lookups plus an NS reachability query)
//! - `HickoryAdapter`, backed by `hickory-resolver` with system or default config
//! - `StaticResolver`, serving canned answers from memory
//!
//! Transport errors are categorized into `DnsLookupError` at this boundary.

mod fixture;
mod records;
mod resolver;

// Re-export public API
pub use fixture::{QueryKind, StaticResolver};
pub use records::{lookup_ns_records, lookup_txt_records};
pub use resolver::{HickoryAdapter, Resolver};
