//! mail_posture library: email-authentication posture assessment
//!
//! This library looks up a domain's SPF, DMARC and DKIM records, classifies
//! each one, and combines them into a coarse Low/Medium/High risk rating.
//!
//! # Example
//!
//! ```no_run
//! use mail_posture::assessment::assess_input;
//! use mail_posture::initialization::init_resolver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = init_resolver(3, 2);
//! let assessment = assess_input(&resolver, "example.com", "google").await?;
//! println!("{}: {} risk", assessment.domain, assessment.risk);
//! # Ok(())
//! # }
//! ```
//!
//! # Offline use
//!
//! Every lookup goes through the [`dns::Resolver`] trait. [`dns::StaticResolver`]
//! serves canned answers, so the whole pipeline runs without a network.
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod assessment;
pub mod classify;
pub mod config;
pub mod dns;
pub mod domain;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod risk;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{
    AssessmentError, DnsLookupError, DomainError, FailureType, InitializationError,
};
pub use run::{run_assessments, run_assessments_with, RunReport};

// Internal run module (assesses a batch of domains)
mod run {
    use anyhow::{bail, Context, Result};
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::io::Write;
    use std::time::Instant;

    use futures::stream::{self, StreamExt};
    use log::{info, warn};
    use strum::IntoEnumIterator;

    use crate::app::{collect_domains, log_progress, print_run_statistics};
    use crate::assessment::assess_input;
    use crate::config::{Config, FailOn, LOGGING_INTERVAL};
    use crate::dns::Resolver;
    use crate::error_handling::RunStats;
    use crate::export::{open_output, render_outcome};
    use crate::initialization::init_resolver;
    use crate::risk::RiskRating;

    /// Results of an assessment run.
    ///
    /// Contains summary statistics about the completed run. The assessments
    /// themselves have already been written to the configured output.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Total number of domains in the run
        pub total: usize,
        /// Number of domains that received a risk rating
        pub assessed: usize,
        /// Number of domains that could not be assessed
        pub failed: usize,
        /// Count of assessed domains per rating
        pub by_risk: BTreeMap<RiskRating, usize>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl RunReport {
        /// Worst rating observed, if any domain was rated.
        pub fn worst(&self) -> Option<RiskRating> {
            self.by_risk
                .iter()
                .filter(|(_, count)| **count > 0)
                .map(|(rating, _)| *rating)
                .max()
        }

        /// Whether the run should end with a non-zero exit code under `fail_on`.
        ///
        /// Failed assessments count against every threshold except `Never`:
        /// a domain whose posture is unknown cannot be said to pass.
        pub fn trips(&self, fail_on: FailOn) -> bool {
            let threshold = match fail_on {
                FailOn::Never => return false,
                FailOn::High => RiskRating::High,
                FailOn::Medium => RiskRating::Medium,
            };
            self.failed > 0 || self.worst().is_some_and(|worst| worst >= threshold)
        }
    }

    /// Assesses every configured domain against live DNS.
    ///
    /// This is the main entry point for the library. It builds a resolver from
    /// the configured timeout and attempt count, then hands off to
    /// [`run_assessments_with`].
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is invalid
    /// - The input file cannot be read, or no domains were given
    /// - The output cannot be created or written
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mail_posture::{run_assessments, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     domains: vec!["example.com".to_string()],
    ///     ..Default::default()
    /// };
    /// let report = run_assessments(config).await?;
    /// println!("Assessed {} domains", report.assessed);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_assessments(config: Config) -> Result<RunReport> {
        config.validate()?;
        let resolver = init_resolver(config.dns_timeout_secs, config.dns_attempts);
        run_assessments_with(&config, &resolver).await
    }

    /// Assesses every configured domain using `resolver`.
    ///
    /// Up to `config.max_concurrency` assessments run at once. Results are
    /// written in input order as they complete. A domain that cannot be
    /// assessed is logged, counted and written as an error entry; it does not
    /// stop the run.
    ///
    /// # Errors
    ///
    /// Same as [`run_assessments`].
    pub async fn run_assessments_with<R: Resolver>(
        config: &Config,
        resolver: &R,
    ) -> Result<RunReport> {
        config.validate()?;
        let start_time = Instant::now();

        let domains = collect_domains(&config.domains, config.file.as_deref()).await?;
        if domains.is_empty() {
            bail!("No domains to assess: pass domains as arguments or with --file");
        }
        let total = domains.len();
        info!(
            "Assessing {} domain{} (max concurrency {})",
            total,
            if total == 1 { "" } else { "s" },
            config.max_concurrency
        );

        let mut output = open_output(config.output.as_deref())?;
        let stats = RunStats::new();
        let selector = config.selector.as_str();

        let mut outcomes = stream::iter(domains.iter())
            .map(|raw| async move { (raw, assess_input(resolver, raw, selector).await) })
            .buffered(config.max_concurrency);

        let mut completed = 0usize;
        while let Some((raw, outcome)) = outcomes.next().await {
            match &outcome {
                Ok(assessment) => {
                    stats.record_rating(assessment.risk);
                    info!("{}: {} risk", assessment.domain, assessment.risk);
                }
                Err(e) => {
                    stats.record_failure(e.failure_type());
                    warn!("Failed to assess {raw}: {e}");
                }
            }

            let rendered = render_outcome(raw, &outcome, config.output_format, Utc::now())?;
            output
                .write_all(rendered.as_bytes())
                .context("Failed to write assessment output")?;

            completed += 1;
            if completed % LOGGING_INTERVAL == 0 {
                log_progress(start_time, completed, total);
            }
        }
        output.flush().context("Failed to flush assessment output")?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_run_statistics(&stats);

        let by_risk = RiskRating::iter()
            .map(|rating| (rating, stats.rating_count(rating)))
            .collect();

        Ok(RunReport {
            total,
            assessed: stats.total_assessed(),
            failed: stats.total_failed(),
            by_risk,
            elapsed_seconds,
        })
    }

}
