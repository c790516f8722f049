//! Domain list input.

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Keeps the meaningful lines of a domain list.
///
/// Lines are trimmed; blank lines and `#` comments are skipped. Validation is
/// left to the assessment so invalid entries are reported, not dropped.
pub fn parse_domain_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

async fn read_lines<R: AsyncBufRead + Unpin>(reader: R) -> Result<Vec<String>> {
    let mut lines = reader.lines();
    let mut collected = Vec::new();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => collected.push(line),
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read line from input: {e}");
                // Invalid UTF-8 lines are skipped; other I/O errors end the read
                if e.kind() != std::io::ErrorKind::InvalidData {
                    return Err(e).context("Failed to read domain list");
                }
            }
        }
    }
    Ok(collected)
}

/// Gathers the domains for a run: positional domains first, then the file.
///
/// A file path of `-` reads from stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub async fn collect_domains(domains: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut collected = parse_domain_lines(domains.iter().map(String::as_str));

    if let Some(path) = file {
        let lines = if path.as_os_str() == "-" {
            info!("Reading domains from stdin");
            read_lines(BufReader::new(tokio::io::stdin())).await?
        } else {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            read_lines(BufReader::new(file)).await?
        };
        let from_file = parse_domain_lines(lines.iter().map(String::as_str));
        info!("Read {} domains from {}", from_file.len(), path.display());
        collected.extend(from_file);
    }

    Ok(collected)
}
