use common::Posting;
use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::{CardExtractor, IndeedExtractor, JobBoard, ScrapeError};

/// Result of searching one term.
///
/// A non-success HTTP status is not an error: the term simply contributes
/// no postings, but the status is kept so callers can tell "nothing new"
/// apart from "board unavailable" if they want to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Postings(Vec<Posting>),
    Failed { status: u16 },
}

impl FetchOutcome {
    pub fn postings(&self) -> &[Posting] {
        match self {
            FetchOutcome::Postings(postings) => postings,
            FetchOutcome::Failed { .. } => &[],
        }
    }

    pub fn into_postings(self) -> Vec<Posting> {
        match self {
            FetchOutcome::Postings(postings) => postings,
            FetchOutcome::Failed { .. } => Vec::new(),
        }
    }
}

pub trait SearchSource {
    fn search(&self, term: &str) -> Result<FetchOutcome, ScrapeError>;
}

/// Blocking fetcher: one GET per term, no retries, transport default timeout.
pub struct BoardFetcher<E = IndeedExtractor> {
    client: Client,
    board: JobBoard,
    extractor: E,
}

impl BoardFetcher<IndeedExtractor> {
    pub fn new(board: JobBoard) -> Result<Self, ScrapeError> {
        Self::with_extractor(board, IndeedExtractor::new()?)
    }
}

impl<E: CardExtractor> BoardFetcher<E> {
    pub fn with_extractor(board: JobBoard, extractor: E) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(board.user_agent())
            .build()
            .map_err(ScrapeError::Client)?;

        Ok(Self {
            client,
            board,
            extractor,
        })
    }

    pub fn board(&self) -> &JobBoard {
        &self.board
    }
}

impl<E: CardExtractor> SearchSource for BoardFetcher<E> {
    fn search(&self, term: &str) -> Result<FetchOutcome, ScrapeError> {
        let url = self.board.search_url(term);
        info!("📡 Fetching jobs from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| ScrapeError::Request {
                term: term.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(term, "Error fetching jobs: {}", status.as_u16());
            return Ok(FetchOutcome::Failed {
                status: status.as_u16(),
            });
        }

        let html = response.text().map_err(|source| ScrapeError::Request {
            term: term.to_string(),
            source,
        })?;
        info!("✅ Fetched {} bytes for \"{}\"", html.len(), term);

        let postings = self.extractor.extract(&html, self.board.base_url());
        info!("📊 {} recent postings for \"{}\"", postings.len(), term);

        Ok(FetchOutcome::Postings(postings))
    }
}
