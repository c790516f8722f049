//! Domain and selector input handling.
//!
//! This module turns raw caller input into the two value types every lookup is
//! keyed on:
//! - `DomainName` - a validated, lowercase host name
//! - `Selector` - an optional DKIM selector
//!
//! It also builds the DNS names for the DMARC and DKIM lookups.

use std::fmt;

use serde::Serialize;

use crate::config::{DKIM_LABEL, DMARC_LABEL, MAX_DOMAIN_LENGTH};
use crate::error_handling::DomainError;

/// A normalized domain name.
///
/// Always lowercase, non-empty, contains at least one `.`, and neither starts
/// nor ends with `.`. Only constructed through [`DomainName::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DomainName(String);

impl DomainName {
    /// Normalizes and validates raw domain input.
    ///
    /// Trims whitespace, lowercases, strips a leading `http://` or `https://`
    /// and any leading or trailing slashes, then checks the domain invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Empty` if nothing is left after normalization,
    /// `DomainError::TooLong` past 253 characters, and `DomainError::Invalid`
    /// if the result has no dot or starts/ends with one.
    ///
    /// # Examples
    ///
    /// ```
    /// use mail_posture::domain::DomainName;
    ///
    /// let domain = DomainName::parse("  HTTPS://Example.COM/ ").unwrap();
    /// assert_eq!(domain.as_str(), "example.com");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let lowered = raw.trim().to_lowercase();
        let without_scheme = lowered
            .strip_prefix("https://")
            .or_else(|| lowered.strip_prefix("http://"))
            .unwrap_or(&lowered);
        let domain = without_scheme.trim_matches('/');

        if domain.is_empty() {
            return Err(DomainError::Empty);
        }
        if domain.len() > MAX_DOMAIN_LENGTH {
            return Err(DomainError::TooLong(domain.len()));
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(DomainError::Invalid);
        }

        Ok(DomainName(domain.to_string()))
    }

    /// The normalized domain.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name holding the DMARC record: `_dmarc.<domain>`.
    pub fn dmarc_name(&self) -> String {
        format!("{DMARC_LABEL}.{}", self.0)
    }

    /// Name holding the DKIM key for `selector`: `<selector>._domainkey.<domain>`.
    ///
    /// Returns `None` when no selector was provided.
    pub fn dkim_name(&self, selector: &Selector) -> Option<String> {
        selector
            .as_option()
            .map(|s| format!("{s}.{DKIM_LABEL}.{}", self.0))
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A DKIM selector as supplied by the caller.
///
/// The empty selector means "not provided". That is a different state from a
/// selector whose lookup returns nothing: no DKIM query is made for it and
/// DKIM is not required for a Low rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    /// Builds a selector from raw input, trimming surrounding whitespace.
    pub fn new(raw: &str) -> Self {
        Selector(raw.trim().to_string())
    }

    /// The "not provided" selector.
    pub fn none() -> Self {
        Selector(String::new())
    }

    /// Whether a non-empty selector was given.
    pub fn is_provided(&self) -> bool {
        !self.0.is_empty()
    }

    /// The selector text, empty when not provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The selector, or `None` when not provided.
    pub fn as_option(&self) -> Option<&str> {
        if self.is_provided() {
            Some(&self.0)
        } else {
            None
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Selector {
    fn from(raw: &str) -> Self {
        Selector::new(raw)
    }
}

impl From<Option<&str>> for Selector {
    fn from(raw: Option<&str>) -> Self {
        raw.map(Selector::new).unwrap_or_default()
    }
}
