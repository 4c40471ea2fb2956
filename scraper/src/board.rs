//! Search endpoint of the job board being scraped.

use reqwest::Url;

use crate::ScrapeError;

pub const DEFAULT_BASE_URL: &str = "https://www.indeed.com";

/// Desktop browser identification, sent so the board is less likely to
/// serve a bot wall instead of results.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const SEARCH_PATH: &str = "/jobs";

#[derive(Debug, Clone)]
pub struct JobBoard {
    base_url: Url,
    user_agent: String,
}

impl JobBoard {
    pub fn new(base_url: &str) -> Result<Self, ScrapeError> {
        let parsed = Url::parse(base_url).map_err(|err| ScrapeError::InvalidBoardUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;

        if parsed.cannot_be_a_base() {
            return Err(ScrapeError::InvalidBoardUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            base_url: parsed,
            user_agent: BROWSER_USER_AGENT.to_string(),
        })
    }

    pub fn indeed() -> Result<Self, ScrapeError> {
        Self::new(DEFAULT_BASE_URL)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Newest-first search URL for a free-text phrase. The phrase is
    /// percent-encoded into `q`.
    pub fn search_url(&self, term: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(SEARCH_PATH);
        url.set_fragment(None);
        url.query_pairs_mut()
            .clear()
            .append_pair("q", term)
            .append_pair("sort", "date");
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_term_and_sorts_by_date() {
        let board = JobBoard::indeed().unwrap();
        let url = board.search_url("Entry Level Data Engineer fresher jobs");

        assert_eq!(url.host_str(), Some("www.indeed.com"));
        assert_eq!(url.path(), "/jobs");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (
                    "q".to_string(),
                    "Entry Level Data Engineer fresher jobs".to_string()
                ),
                ("sort".to_string(), "date".to_string()),
            ]
        );
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_search_url_escapes_reserved_characters() {
        let board = JobBoard::indeed().unwrap();
        let url = board.search_url("C++ & Rust");

        assert!(!url.query().unwrap().contains("C++ &"));
        let q = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned());
        assert_eq!(q.as_deref(), Some("C++ & Rust"));
    }

    #[test]
    fn test_search_url_replaces_existing_path_and_query() {
        let board = JobBoard::new("http://127.0.0.1:8080/some/page?x=1#top").unwrap();
        let url = board.search_url("rust");
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/jobs?q=rust&sort=date");
    }

    #[test]
    fn test_rejects_unusable_base_urls() {
        assert!(matches!(
            JobBoard::new("not a url"),
            Err(ScrapeError::InvalidBoardUrl { .. })
        ));
        assert!(matches!(
            JobBoard::new("mailto:jobs@example.com"),
            Err(ScrapeError::InvalidBoardUrl { .. })
        ));
    }

    #[test]
    fn test_uses_browser_user_agent() {
        let board = JobBoard::indeed().unwrap();
        assert_eq!(board.user_agent(), BROWSER_USER_AGENT);
    }
}
