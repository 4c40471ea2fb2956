use common::{FailedTerm, Posting};
use tracing::info;

use crate::{FetchOutcome, ScrapeError, SearchSource};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    pub postings: Vec<Posting>,
    pub failed_terms: Vec<FailedTerm>,
}

/// Searches every term in order and concatenates the results.
///
/// No deduplication: the same posting found by two terms appears twice.
pub fn collect_postings<S, T>(source: &S, terms: &[T]) -> Result<Collected, ScrapeError>
where
    S: SearchSource + ?Sized,
    T: AsRef<str>,
{
    let mut collected = Collected::default();

    for term in terms {
        let term = term.as_ref();
        match source.search(term)? {
            FetchOutcome::Postings(postings) => collected.postings.extend(postings),
            FetchOutcome::Failed { status } => collected.failed_terms.push(FailedTerm {
                term: term.to_string(),
                status,
            }),
        }
    }

    info!(
        "📊 Total jobs found: {} ({} of {} searches failed)",
        collected.postings.len(),
        collected.failed_terms.len(),
        terms.len()
    );
    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ApplyLink;
    use std::cell::RefCell;
    use std::collections::HashMap;

    fn posting(title: &str) -> Posting {
        Posting {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            link: ApplyLink::Unavailable,
        }
    }

    #[derive(Default)]
    struct CannedSource {
        outcomes: HashMap<String, FetchOutcome>,
        calls: RefCell<Vec<String>>,
    }

    impl CannedSource {
        fn with(mut self, term: &str, outcome: FetchOutcome) -> Self {
            self.outcomes.insert(term.to_string(), outcome);
            self
        }
    }

    impl SearchSource for CannedSource {
        fn search(&self, term: &str) -> Result<FetchOutcome, ScrapeError> {
            self.calls.borrow_mut().push(term.to_string());
            Ok(self
                .outcomes
                .get(term)
                .cloned()
                .unwrap_or(FetchOutcome::Postings(Vec::new())))
        }
    }

    #[test]
    fn test_concatenates_in_term_order() {
        let source = CannedSource::default()
            .with("a", FetchOutcome::Postings(vec![posting("a1"), posting("a2")]))
            .with("b", FetchOutcome::Postings(vec![posting("b1")]))
            .with("c", FetchOutcome::Postings(vec![posting("c1"), posting("c2")]));

        let collected = collect_postings(&source, &["a", "b", "c"]).unwrap();

        let titles: Vec<&str> = collected.postings.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a1", "a2", "b1", "c1", "c2"]);
        assert_eq!(*source.calls.borrow(), vec!["a", "b", "c"]);
        assert!(collected.failed_terms.is_empty());
    }

    #[test]
    fn test_keeps_duplicates_across_terms() {
        let source = CannedSource::default()
            .with("a", FetchOutcome::Postings(vec![posting("same")]))
            .with("b", FetchOutcome::Postings(vec![posting("same")]));

        let collected = collect_postings(&source, &["a", "b"]).unwrap();
        assert_eq!(collected.postings.len(), 2);
    }

    #[test]
    fn test_failed_term_contributes_nothing_but_is_recorded() {
        let source = CannedSource::default()
            .with("a", FetchOutcome::Failed { status: 429 })
            .with("b", FetchOutcome::Postings(vec![posting("b1")]));

        let collected = collect_postings(&source, &["a".to_string(), "b".to_string()]).unwrap();

        assert_eq!(collected.postings, vec![posting("b1")]);
        assert_eq!(
            collected.failed_terms,
            vec![FailedTerm {
                term: "a".to_string(),
                status: 429
            }]
        );
    }

    #[test]
    fn test_no_terms_yields_empty() {
        let source = CannedSource::default();
        let terms: [&str; 0] = [];
        let collected = collect_postings(&source, &terms).unwrap();
        assert_eq!(collected, Collected::default());
    }

    struct BrokenSource;

    impl SearchSource for BrokenSource {
        fn search(&self, _term: &str) -> Result<FetchOutcome, ScrapeError> {
            Err(ScrapeError::InvalidBoardUrl {
                url: "x".to_string(),
                reason: "boom".to_string(),
            })
        }
    }

    #[test]
    fn test_source_errors_propagate() {
        assert!(collect_postings(&BrokenSource, &["a"]).is_err());
    }
}
