//! Run statistics tracking.
//!
//! This module provides thread-safe counters for assessment outcomes: how many
//! domains landed in each risk rating and how many could not be assessed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureType;
use crate::risk::RiskRating;

/// Thread-safe assessment statistics tracker.
///
/// Every `RiskRating` and `FailureType` has its own atomic counter, created
/// at zero in `new()`, so counters can be bumped from concurrent assessments
/// through a shared reference.
pub struct RunStats {
    ratings: HashMap<RiskRating, AtomicUsize>,
    failures: HashMap<FailureType, AtomicUsize>,
}

impl RunStats {
    pub fn new() -> Self {
        let ratings = RiskRating::iter()
            .map(|rating| (rating, AtomicUsize::new(0)))
            .collect();
        let failures = FailureType::iter()
            .map(|failure| (failure, AtomicUsize::new(0)))
            .collect();

        RunStats { ratings, failures }
    }

    /// Records one completed assessment.
    pub fn record_rating(&self, rating: RiskRating) {
        if let Some(counter) = self.ratings.get(&rating) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment rating counter for {:?} which is not in the map. \
                 This indicates a bug in RunStats initialization.",
                rating
            );
        }
    }

    /// Records one failed assessment.
    pub fn record_failure(&self, failure: FailureType) {
        if let Some(counter) = self.failures.get(&failure) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in RunStats initialization.",
                failure
            );
        }
    }

    pub fn rating_count(&self, rating: RiskRating) -> usize {
        self.ratings
            .get(&rating)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn failure_count(&self, failure: FailureType) -> usize {
        self.failures
            .get(&failure)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_assessed(&self) -> usize {
        RiskRating::iter().map(|r| self.rating_count(r)).sum()
    }

    pub fn total_failed(&self) -> usize {
        FailureType::iter().map(|f| self.failure_count(f)).sum()
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
