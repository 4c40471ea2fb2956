//! Job board scraper
//!
//! Searches the board once per term, keeps recently posted cards and
//! concatenates the results.

mod aggregate;
mod board;
mod error;
mod extract;
mod fetch;

pub use aggregate::{collect_postings, Collected};
pub use board::{JobBoard, BROWSER_USER_AGENT, DEFAULT_BASE_URL};
pub use error::ScrapeError;
pub use extract::{resolve_link, CardExtractor, IndeedExtractor, RecencyRule};
pub use fetch::{BoardFetcher, FetchOutcome, SearchSource};
