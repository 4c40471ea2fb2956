use std::fmt::Write;

use chrono::NaiveDate;
use common::{FailedTerm, Posting};

pub const NO_POSTINGS_MESSAGE: &str = "No new entry-level roles found in the last 24 hours.";
pub const DIGEST_HEADER: &str = "New Entry-Level Jobs Found:";

/// A rendered message, ready for a [`crate::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub fn subject_for(date: NaiveDate) -> String {
    format!("Daily Job Alert | {}", date.format("%Y-%m-%d"))
}

/// Numbered plain-text list of postings, or the fixed "nothing new" sentence.
pub fn render_body(postings: &[Posting]) -> String {
    if postings.is_empty() {
        return NO_POSTINGS_MESSAGE.to_string();
    }

    let mut body = format!("{DIGEST_HEADER}\n\n");
    for (i, posting) in postings.iter().enumerate() {
        // Writing into a String never fails.
        let _ = write!(
            body,
            "{}. {}\nCompany: {}\nLocation: {}\nApply: {}\n\n",
            i + 1,
            posting.title,
            posting.company,
            posting.location,
            posting.link
        );
    }
    body
}

/// Lists the searches that came back with an error status, if any.
pub fn render_failure_note(failed_terms: &[FailedTerm]) -> Option<String> {
    if failed_terms.is_empty() {
        return None;
    }

    let mut note = String::from("Some searches could not be completed:\n");
    for failed in failed_terms {
        let _ = writeln!(note, "- {} (HTTP {})", failed.term, failed.status);
    }
    Some(note)
}

/// Builds the day's message. Failed searches are only mentioned when
/// `failed_terms` is given; otherwise an outage reads like a quiet day.
pub fn compose(
    to: &str,
    date: NaiveDate,
    postings: &[Posting],
    failed_terms: Option<&[FailedTerm]>,
) -> OutgoingMail {
    let mut body = render_body(postings);

    if let Some(note) = failed_terms.and_then(render_failure_note) {
        if !body.ends_with("\n\n") {
            body.push_str("\n\n");
        }
        body.push_str(&note);
    }

    OutgoingMail {
        to: to.to_string(),
        subject: subject_for(date),
        body,
    }
}
