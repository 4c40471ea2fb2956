use anyhow::{Context, Result};
use chrono::NaiveDate;
use job_scraper::{collect_postings, BoardFetcher, JobBoard, SearchSource};
use notifier::{compose, Mailer, SmtpMailer};
use tracing::{error, info};

use crate::{Config, ConfigError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// Sender credentials were missing; nothing was fetched or sent.
    Skipped,
    Sent {
        postings: usize,
        failed_searches: usize,
    },
}

/// Builds the live board fetcher and SMTP mailer. Neither touches the
/// network until used.
pub fn connect(config: &Config) -> Result<(BoardFetcher, SmtpMailer)> {
    let board = JobBoard::new(&config.board_url)?;
    let fetcher = BoardFetcher::new(board)?;
    let mailer = SmtpMailer::new(config.smtp.clone())?;
    Ok((fetcher, mailer))
}

/// Entry point guard: a missing sending account ends the run quietly,
/// before `connect` is called. Any other configuration error is fatal.
pub fn start<F, S, M>(config: Result<Config, ConfigError>, connect: F, today: NaiveDate) -> Result<RunStatus>
where
    F: FnOnce(&Config) -> Result<(S, M)>,
    S: SearchSource,
    M: Mailer,
{
    let config = match config {
        Ok(config) => config,
        Err(err @ ConfigError::MissingCredentials) => {
            error!("Error: {err}");
            return Ok(RunStatus::Skipped);
        }
        Err(err) => return Err(err).context("invalid configuration"),
    };

    let (source, mailer) = connect(&config)?;
    run(&config, &source, &mailer, today)
}

/// Fetch, filter, format, send. Exactly one mail per call.
pub fn run<S, M>(config: &Config, source: &S, mailer: &M, today: NaiveDate) -> Result<RunStatus>
where
    S: SearchSource + ?Sized,
    M: Mailer + ?Sized,
{
    info!("🔍 Searching {} terms", config.search_terms.len());
    let collected =
        collect_postings(source, &config.search_terms).context("job search failed")?;

    let failures = config
        .report_fetch_failures
        .then_some(collected.failed_terms.as_slice());
    let mail = compose(&config.recipient, today, &collected.postings, failures);

    mailer.send(&mail).context("failed to send job alert")?;

    Ok(RunStatus::Sent {
        postings: collected.postings.len(),
        failed_searches: collected.failed_terms.len(),
    })
}
