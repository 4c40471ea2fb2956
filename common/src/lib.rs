use serde::{Deserialize, Serialize};
use std::fmt;

/// One job listing pulled from a search results page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Posting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: ApplyLink,
}

/// Where to apply. Cards without an anchor still make it into the digest.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplyLink {
    Url(String),
    Unavailable,
}

impl ApplyLink {
    pub fn as_url(&self) -> Option<&str> {
        match self {
            ApplyLink::Url(url) => Some(url),
            ApplyLink::Unavailable => None,
        }
    }
}

impl fmt::Display for ApplyLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyLink::Url(url) => f.write_str(url),
            ApplyLink::Unavailable => f.write_str("N/A"),
        }
    }
}

/// A search term whose results page came back with a non-success status.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FailedTerm {
    pub term: String,
    pub status: u16,
}
