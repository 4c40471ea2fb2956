//! Daily Job Alert
//!
//! Searches the job board for the configured terms, keeps postings from the
//! last day and emails the digest. Meant to be run once a day by cron or a
//! CI schedule.

use alert::{connect, logging, start, Config, RunStatus};
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init();
    info!("🚀 Starting daily job alert...");

    let today = chrono::Local::now().date_naive();
    match start(Config::from_env(), connect, today)? {
        RunStatus::Skipped => info!("Nothing sent"),
        RunStatus::Sent {
            postings,
            failed_searches,
        } => info!(
            "✨ Alert sent with {} postings ({} failed searches)",
            postings, failed_searches
        ),
    }
    Ok(())
}
