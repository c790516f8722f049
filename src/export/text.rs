//! Plain-text report rendering.
//!
//! Fixed-layout report: a header with the generation time, then one section
//! per record family and a closing risk line.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::{self, Write};

use crate::assessment::Assessment;
use crate::config::NOT_FOUND_LABEL;
use crate::error_handling::AssessmentError;

const REPORT_TITLE: &str = "Email Authentication Security Report";
const HEAVY_RULE: &str = "==================================================";
const LIGHT_RULE: &str = "--------------------------------------------------";

fn record_or_not_found(record: &Option<String>) -> &str {
    record.as_deref().unwrap_or(NOT_FOUND_LABEL)
}

fn section<W: Write>(out: &mut W, title: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{LIGHT_RULE}")
}

fn write_report<W: Write>(
    out: &mut W,
    assessment: &Assessment,
    generated_at: DateTime<Utc>,
) -> fmt::Result {
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(
        out,
        "Generated: {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(out, "{HEAVY_RULE}")?;
    writeln!(out, "Domain: {}", assessment.domain)?;

    section(out, "SPF")?;
    writeln!(out, "Record: {}", record_or_not_found(&assessment.spf))?;
    writeln!(out, "{}", assessment.spf_policy)?;

    section(out, "DMARC")?;
    writeln!(out, "Record: {}", record_or_not_found(&assessment.dmarc))?;
    writeln!(out, "{}", assessment.dmarc_policy)?;

    section(out, "DKIM")?;
    let selector = assessment.selector.as_option().unwrap_or("(not provided)");
    writeln!(out, "Selector: {selector}")?;
    if assessment.selector.is_provided() {
        writeln!(out, "Record: {}", record_or_not_found(&assessment.dkim))?;
    }
    writeln!(out, "Status: {}", assessment.dkim_status)?;

    section(out, "Risk")?;
    writeln!(out, "Risk level: {}", assessment.risk)?;
    writeln!(out, "{HEAVY_RULE}")
}

/// Renders one assessment as a text report.
pub fn render_text(assessment: &Assessment, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, assessment, generated_at);
    out
}

/// Renders an assessment that could not be produced.
pub fn render_text_failure(input: &str, error: &AssessmentError) -> String {
    format!("{input}: {error}\n")
}
