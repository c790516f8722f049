//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mail_posture` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use mail_posture::config::{DEFAULT_MAX_CONCURRENCY, DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use mail_posture::initialization::init_logger_with;
use mail_posture::{run_assessments, Config, FailOn, LogFormat, LogLevel, OutputFormat};

/// Exit code when the `--fail-on` threshold is met.
const EXIT_THRESHOLD_MET: i32 = 2;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "mail_posture",
    about = "Checks SPF, DMARC and DKIM records and rates a domain's email-spoofing risk."
)]
struct Cli {
    /// Domains to assess (http:// and https:// URLs are accepted)
    #[arg(value_name = "DOMAINS")]
    domains: Vec<String>,

    /// File with one domain per line (`-` for stdin, `#` starts a comment)
    #[arg(long, short = 'f', value_name = "PATH")]
    file: Option<PathBuf>,

    /// DKIM selector to check on every domain
    #[arg(long, short = 's', value_name = "SEL", default_value = "")]
    selector: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write assessments to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Maximum concurrent assessments
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    max_concurrency: usize,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    dns_timeout_secs: u64,

    /// DNS attempts per query
    #[arg(long, default_value_t = DNS_ATTEMPTS)]
    dns_attempts: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,

    /// Exit with code 2 when any domain is rated at or above this level
    #[arg(long, value_enum, default_value = "never")]
    fail_on: FailOn,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            domains: cli.domains,
            file: cli.file,
            selector: cli.selector,
            output_format: cli.format,
            output: cli.output,
            max_concurrency: cli.max_concurrency,
            dns_timeout_secs: cli.dns_timeout_secs,
            dns_attempts: cli.dns_attempts,
            log_level: cli.log_level,
            log_format: cli.log_format,
            fail_on: cli.fail_on,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let fail_on = config.fail_on;
    match run_assessments(config).await {
        Ok(report) => {
            eprintln!(
                "Assessed {} domain{} ({} rated, {} failed) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.assessed,
                report.failed,
                report.elapsed_seconds
            );
            if report.trips(fail_on) {
                process::exit(EXIT_THRESHOLD_MET);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("mail_posture error: {:#}", e);
            process::exit(1);
        }
    }
}
