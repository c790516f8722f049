//! Run statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FailureType, RunStats};
use crate::risk::RiskRating;

/// Per-rating and per-failure breakdown, skipping empty buckets.
///
/// The one-line run total is printed by the binary from `RunReport`.
fn breakdown_lines(stats: &RunStats) -> Vec<String> {
    let mut lines = Vec::new();
    let assessed = stats.total_assessed();
    let failed = stats.total_failed();

    if assessed > 0 {
        lines.push(format!("Risk Ratings ({} assessed):", assessed));
        for rating in RiskRating::iter() {
            let count = stats.rating_count(rating);
            if count > 0 {
                lines.push(format!("   {}: {}", rating, count));
            }
        }
    }

    if failed > 0 {
        lines.push(format!("Failures ({} total):", failed));
        for failure in FailureType::iter() {
            let count = stats.failure_count(failure);
            if count > 0 {
                lines.push(format!("   {}: {}", failure.as_str(), count));
            }
        }
    }

    lines
}

/// Logs risk and failure counts.
pub fn print_run_statistics(stats: &RunStats) {
    for line in breakdown_lines(stats) {
        info!("{line}");
    }
}
