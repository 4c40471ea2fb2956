use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid job board URL {url}: {reason}")]
    InvalidBoardUrl { url: String, reason: String },

    #[error("invalid selector `{selector}`: {reason}")]
    Selector {
        selector: &'static str,
        reason: String,
    },

    #[error("invalid text pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request for \"{term}\" failed: {source}")]
    Request {
        term: String,
        #[source]
        source: reqwest::Error,
    },
}
