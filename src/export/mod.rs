//! Assessment rendering.
//!
//! This module turns assessments into output in one of two formats:
//! - Plain-text report (fixed layout, one block per domain)
//! - JSONL (one JSON object per line)
//!
//! Output goes to a file or to stdout; broken pipes on stdout are ignored.

mod jsonl;
mod text;
mod writer;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::assessment::Assessment;
use crate::config::OutputFormat;
use crate::error_handling::AssessmentError;

pub use jsonl::{render_jsonl, render_jsonl_failure};
pub use text::{render_text, render_text_failure};
pub use writer::open_output;

/// Renders the outcome of assessing `input` in the requested format.
///
/// The returned string always ends with a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_outcome(
    input: &str,
    outcome: &Result<Assessment, AssessmentError>,
    format: OutputFormat,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let rendered = match (format, outcome) {
        (OutputFormat::Text, Ok(assessment)) => {
            // Blank line between consecutive reports
            format!("{}\n", render_text(assessment, generated_at))
        }
        (OutputFormat::Text, Err(error)) => render_text_failure(input, error),
        (OutputFormat::Jsonl, Ok(assessment)) => {
            let line = render_jsonl(assessment, generated_at)
                .with_context(|| format!("Failed to serialize assessment for {input}"))?;
            format!("{line}\n")
        }
        (OutputFormat::Jsonl, Err(error)) => {
            format!("{}\n", render_jsonl_failure(input, error))
        }
    };
    Ok(rendered)
}
