//! Core data models used throughout journal-context.
//!
//! These types represent the resolved date intervals, journal documents, and
//! aggregation results that flow from the date resolver through the
//! aggregator to the chat session.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::path::PathBuf;

/// Maximum number of characters in an aggregated context blob.
pub const MAX_CHARS: usize = 128_000;

/// Date assigned to documents whose name carries no parseable date.
///
/// Far enough in the past that no realistic interval contains it.
pub fn sentinel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// A single candidate returned by a [`DateParser`](crate::date_range::DateParser).
///
/// `end` is `None` when the text named a single point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl ParsedDate {
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: None,
        }
    }

    pub fn span(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Last calendar day covered by this candidate.
    pub fn last_day(&self) -> NaiveDate {
        self.end.unwrap_or(self.start)
    }
}

/// Inclusive pair of timestamps bounding which documents are eligible.
///
/// `start` always sits at 00:00:00.000 of its day and `end` at
/// 23:59:59.999 of its day, with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateInterval {
    /// Builds an interval covering every day from `first` to `last`.
    ///
    /// Arguments given in reverse order are swapped.
    pub fn from_days(first: NaiveDate, last: NaiveDate) -> Self {
        let (first, last) = if last < first {
            (last, first)
        } else {
            (first, last)
        };
        Self {
            start: first.and_time(NaiveTime::MIN),
            end: last.and_time(end_of_day()),
        }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self::from_days(day, day)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Inclusive on both ends. A document date counts as midnight of its day.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let at = date.and_time(NaiveTime::MIN);
        self.start <= at && at <= self.end
    }

    /// en-US short form of the first day, e.g. `1/5/2023`.
    pub fn display_start(&self) -> String {
        short_date(self.start_date())
    }

    /// en-US short form of the last day, e.g. `1/31/2023`.
    pub fn display_end(&self) -> String {
        short_date(self.end_date())
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}

/// `M/D/YYYY`, no zero padding.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// `Mon D, YYYY`, used in entry headers.
pub fn header_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Handle to a journal file. The store owns the file; the core only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub path: PathBuf,
}

impl Document {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// A document paired with the date derived from its name.
#[derive(Debug, Clone)]
pub struct CandidateDocument {
    pub document: Document,
    pub document_date: NaiveDate,
}

/// Output of one aggregation pass.
#[derive(Debug, Clone, Serialize)]
pub struct AggregationResult {
    pub combined_text: String,
    pub resolved_start: String,
    pub resolved_end: String,
    /// Names of the documents whose content made it into `combined_text`,
    /// in concatenation order.
    pub included: Vec<String>,
}

/// Caller-facing result of [`get_journal_context`](crate::journal::get_journal_context).
#[derive(Debug, Clone, Serialize)]
pub struct JournalContext {
    pub combined_text: String,
    pub start_date: String,
    pub end_date: String,
    pub included: Vec<String>,
}

impl From<AggregationResult> for JournalContext {
    fn from(result: AggregationResult) -> Self {
        Self {
            combined_text: result.combined_text,
            start_date: result.resolved_start,
            end_date: result.resolved_end,
            included: result.included,
        }
    }
}
