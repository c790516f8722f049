//! Progress logging utilities.

use log::info;

/// Logs progress information about the assessments completed so far.
///
/// # Arguments
///
/// * `start_time` - The start time of the run
/// * `completed` - Number of finished assessments (successful or not)
/// * `total` - Number of domains in the run
pub fn log_progress(start_time: std::time::Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Assessed {}/{} domains in {:.2} seconds (~{:.2} domains/sec)",
        completed, total, elapsed_secs, rate
    );
}
