//! Turns a search results page into postings.
//!
//! Everything that depends on the board's markup or wording lives here, so
//! pointing the alert at another board (or a new Indeed layout) only means
//! another `CardExtractor`.

use common::{ApplyLink, Posting};
use regex::Regex;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::ScrapeError;

pub trait CardExtractor {
    /// Pulls every recent, complete job card out of `html` in page order.
    /// Relative apply links are resolved against `base`.
    fn extract(&self, html: &str, base: &Url) -> Vec<Posting>;
}

/// Approximates "posted within the last day" from the card's age label:
/// `day` (case-sensitive) or any casing of `just`.
#[derive(Debug, Clone)]
pub struct RecencyRule {
    pattern: Regex,
}

impl RecencyRule {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            pattern: Regex::new(r"day|(?i:just)")?,
        })
    }

    pub fn is_recent(&self, posted: &str) -> bool {
        self.pattern.is_match(posted)
    }
}

/// Selectors for the current Indeed results layout.
#[derive(Debug)]
pub struct IndeedExtractor {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    posted: Selector,
    anchor: Selector,
    recency: RecencyRule,
    whitespace: Regex,
}

impl IndeedExtractor {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            card: parse_selector("div.job_seen_beacon")?,
            title: parse_selector("h2.jobTitle")?,
            company: parse_selector(r#"span[data-testid="company-name"]"#)?,
            location: parse_selector(r#"div[data-testid="text-location"]"#)?,
            posted: parse_selector("span.date")?,
            anchor: parse_selector("a[href]")?,
            recency: RecencyRule::new()?,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    fn parse_card(&self, card: ElementRef<'_>, base: &Url) -> Option<Posting> {
        let title_el = card.select(&self.title).next()?;
        let company = self.first_text(card, &self.company)?;
        let location = self.first_text(card, &self.location)?;
        let posted = self.first_text(card, &self.posted)?;

        let title = self.clean_text(title_el);
        if !self.recency.is_recent(&posted) {
            debug!(%title, %posted, "skipping stale posting");
            return None;
        }

        let link = title_el
            .select(&self.anchor)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| resolve_link(base, href))
            .unwrap_or(ApplyLink::Unavailable);

        debug!(%title, %company, "📋 found recent posting");
        Some(Posting {
            title,
            company,
            location,
            link,
        })
    }

    fn first_text(&self, card: ElementRef<'_>, selector: &Selector) -> Option<String> {
        card.select(selector).next().map(|el| self.clean_text(el))
    }

    fn clean_text(&self, element: ElementRef<'_>) -> String {
        let raw = element.text().collect::<String>();
        self.whitespace.replace_all(raw.trim(), " ").into_owned()
    }
}

impl CardExtractor for IndeedExtractor {
    fn extract(&self, html: &str, base: &Url) -> Vec<Posting> {
        let document = Html::parse_document(html);
        document
            .select(&self.card)
            .filter_map(|card| self.parse_card(card, base))
            .collect()
    }
}

/// Absolute hrefs are kept as-is, relative ones are joined onto the board.
pub fn resolve_link(base: &Url, href: &str) -> ApplyLink {
    match base.join(href.trim()) {
        Ok(url) => ApplyLink::Url(url.to_string()),
        Err(err) => {
            debug!(href, %err, "unusable apply link");
            ApplyLink::Unavailable
        }
    }
}

fn parse_selector(selector: &'static str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|err| ScrapeError::Selector {
        selector,
        reason: format!("{err:?}"),
    })
}
