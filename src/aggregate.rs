//! Journal aggregation.
//!
//! Filters a folder listing down to the entries dated inside an interval,
//! reads them concurrently, and joins them into one context blob:
//!
//! ```text
//! ---
//! My Journal Entry from Jan 1, 2023
//! <entry text>
//! ---
//! My Journal Entry from Jan 2, 2023
//! <entry text>
//! ```
//!
//! Entries are joined oldest first, ties in listing order, so the same
//! corpus always produces the same text. The blob is hard-capped at
//! [`MAX_CHARS`] characters.

use chrono::NaiveDate;
use futures::future::join_all;

use crate::config::JournalConfig;
use crate::models::{
    header_date, sentinel_date, AggregationResult, CandidateDocument, DateInterval, Document,
    MAX_CHARS,
};
use crate::store::DocumentStore;

/// Derives a calendar date from a document name.
pub trait DateExtractor: Send + Sync {
    /// `None` when the name carries no date in the expected shape.
    fn extract(&self, name: &str) -> Option<NaiveDate>;
}

/// Reads a date from a fixed-length name prefix, e.g. the `2023-01-15` in
/// `2023-01-15 Sunday.md`.
#[derive(Debug, Clone)]
pub struct PrefixDateExtractor {
    prefix_len: usize,
    format: String,
}

impl PrefixDateExtractor {
    pub fn new(prefix_len: usize, format: impl Into<String>) -> Self {
        Self {
            prefix_len,
            format: format.into(),
        }
    }

    pub fn from_config(config: &JournalConfig) -> Self {
        Self::new(config.date_prefix_len, config.date_format.clone())
    }
}

impl Default for PrefixDateExtractor {
    /// `YYYY-MM-DD` in the first 10 characters.
    fn default() -> Self {
        Self::new(10, "%Y-%m-%d")
    }
}

impl DateExtractor for PrefixDateExtractor {
    fn extract(&self, name: &str) -> Option<NaiveDate> {
        let end = name
            .char_indices()
            .nth(self.prefix_len)
            .map_or(name.len(), |(i, _)| i);
        NaiveDate::parse_from_str(&name[..end], &self.format).ok()
    }
}

pub struct DocumentAggregator {
    extractor: Box<dyn DateExtractor>,
    max_chars: usize,
}

impl DocumentAggregator {
    pub fn new(extractor: Box<dyn DateExtractor>) -> Self {
        Self {
            extractor,
            max_chars: MAX_CHARS,
        }
    }

    /// Pairs each document with its name date, falling back to the
    /// sentinel date for names that do not parse.
    pub fn candidates(&self, documents: Vec<Document>) -> Vec<CandidateDocument> {
        documents
            .into_iter()
            .map(|document| {
                let document_date = self
                    .extractor
                    .extract(&document.name)
                    .unwrap_or_else(sentinel_date);
                CandidateDocument {
                    document,
                    document_date,
                }
            })
            .collect()
    }

    /// Documents dated inside `interval`, in listing order.
    pub fn select(
        &self,
        documents: Vec<Document>,
        interval: &DateInterval,
    ) -> Vec<CandidateDocument> {
        self.candidates(documents)
            .into_iter()
            .filter(|c| interval.contains(c.document_date))
            .collect()
    }

    pub async fn aggregate(
        &self,
        store: &dyn DocumentStore,
        documents: Vec<Document>,
        interval: &DateInterval,
    ) -> AggregationResult {
        let mut selected = self.select(documents, interval);
        tracing::debug!(
            matched = selected.len(),
            start = %interval.start_date(),
            end = %interval.end_date(),
            "selected journal entries"
        );

        // Stable sort: same-day entries keep listing order.
        selected.sort_by_key(|c| c.document_date);

        let reads = selected.iter().map(|c| store.read(&c.document));
        let contents = join_all(reads).await;

        let mut combined_text = String::new();
        let mut included = Vec::new();
        for (candidate, content) in selected.iter().zip(contents) {
            match content {
                Ok(text) => {
                    combined_text.push_str(&entry_block(candidate.document_date, &text));
                    included.push(candidate.document.name.clone());
                }
                Err(e) => {
                    tracing::warn!(document = %candidate.document.name, error = %e, "skipping unreadable journal entry");
                }
            }
        }

        let total = combined_text.chars().count();
        if truncate_chars(&mut combined_text, self.max_chars) {
            tracing::info!(
                total,
                kept = self.max_chars,
                "journal context too long, trimmed"
            );
        }

        AggregationResult {
            combined_text,
            resolved_start: interval.display_start(),
            resolved_end: interval.display_end(),
            included,
        }
    }
}

impl Default for DocumentAggregator {
    fn default() -> Self {
        Self::new(Box::new(PrefixDateExtractor::default()))
    }
}

fn entry_block(date: NaiveDate, content: &str) -> String {
    format!(
        "---\nMy Journal Entry from {}\n{}\n",
        header_date(date),
        content
    )
}

/// Cuts `text` to its first `max` characters. Returns whether anything was
/// removed.
fn truncate_chars(text: &mut String, max: usize) -> bool {
    match text.char_indices().nth(max) {
        Some((cut, _)) => {
            text.truncate(cut);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn doc(name: &str) -> Document {
        Document::new(name, format!("/journal/{}", name))
    }

    #[test]
    fn test_prefix_extractor() {
        let ex = PrefixDateExtractor::default();
        assert_eq!(ex.extract("2023-01-15.md"), Some(ymd(2023, 1, 15)));
        assert_eq!(ex.extract("2023-01-15 Sunday.md"), Some(ymd(2023, 1, 15)));
        assert_eq!(ex.extract("2023-01-15"), Some(ymd(2023, 1, 15)));
        assert_eq!(ex.extract("bad-name.md"), None);
        assert_eq!(ex.extract("2023-02-30.md"), None);
        assert_eq!(ex.extract(""), None);
        assert_eq!(ex.extract("日記2023-01-15"), None);
    }

    #[test]
    fn test_custom_format_extractor() {
        let ex = PrefixDateExtractor::new(8, "%Y%m%d");
        assert_eq!(ex.extract("20230115-notes.md"), Some(ymd(2023, 1, 15)));
        assert_eq!(ex.extract("2023-01-15.md"), None);
    }

    #[test]
    fn test_unparseable_names_get_sentinel() {
        let agg = DocumentAggregator::default();
        let candidates = agg.candidates(vec![doc("2023-01-01.md"), doc("bad-name.md")]);
        assert_eq!(candidates[0].document_date, ymd(2023, 1, 1));
        assert_eq!(candidates[1].document_date, sentinel_date());
    }

    #[test]
    fn test_select_filters_inclusive_range() {
        let agg = DocumentAggregator::default();
        let interval = DateInterval::from_days(ymd(2023, 1, 1), ymd(2023, 1, 31));
        let selected = agg.select(
            vec![
                doc("2022-12-31.md"),
                doc("2023-01-01.md"),
                doc("2023-01-31.md"),
                doc("2023-02-15.md"),
                doc("bad-name.md"),
            ],
            &interval,
        );
        let names: Vec<&str> = selected.iter().map(|c| c.document.name.as_str()).collect();
        assert_eq!(names, vec!["2023-01-01.md", "2023-01-31.md"]);
    }

    #[test]
    fn test_entry_block_format() {
        assert_eq!(
            entry_block(ymd(2023, 1, 5), "Walked the dog."),
            "---\nMy Journal Entry from Jan 5, 2023\nWalked the dog.\n"
        );
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        let mut short = "abc".to_string();
        assert!(!truncate_chars(&mut short, 3));
        assert_eq!(short, "abc");

        let mut accented = "ééééé".to_string();
        assert!(truncate_chars(&mut accented, 2));
        assert_eq!(accented, "éé");
    }
}
