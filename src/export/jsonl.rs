//! JSONL rendering.
//!
//! Each assessment becomes one JSON object on one line, suitable for piping
//! to `jq` or loading into other tools.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::assessment::Assessment;
use crate::error_handling::AssessmentError;

/// Renders one assessment as a single JSON line (without the newline).
///
/// Absent records are `null`. A `generated_at` timestamp is added.
///
/// # Errors
///
/// Returns an error if the assessment cannot be serialized.
pub fn render_jsonl(
    assessment: &Assessment,
    generated_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(assessment)?;
    if let Value::Object(map) = &mut value {
        map.insert(
            "generated_at".to_string(),
            json!(generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
    }
    serde_json::to_string(&value)
}

/// Renders an assessment that could not be produced.
pub fn render_jsonl_failure(input: &str, error: &AssessmentError) -> String {
    json!({
        "domain": input,
        "error": error.to_string(),
    })
    .to_string()
}
