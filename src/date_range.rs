//! Date-range resolution.
//!
//! Turns free text such as `"1 jan 2023 to 31 jan 2023"` or
//! `"2 months ago to today"` into a [`DateInterval`]. Detection itself is
//! delegated to a [`DateParser`]; this module applies the resolution policy:
//!
//! - **First match wins.** Only the first candidate the parser reports is
//!   used. Any further dates or ranges in the input are ignored.
//! - A candidate without an end covers a single day.
//! - The interval runs from the start of its first day to the last
//!   millisecond of its last day.

use crate::models::{DateInterval, ParsedDate};
use crate::natural_date::NaturalDateParser;

/// Detects dates and date ranges in free text.
///
/// Candidates are returned in the parser's own preference order, which for
/// the built-in [`NaturalDateParser`] is their position in the text.
pub trait DateParser: Send + Sync {
    fn parse(&self, text: &str) -> Vec<ParsedDate>;
}

pub struct DateRangeResolver {
    parser: Box<dyn DateParser>,
}

impl DateRangeResolver {
    pub fn new(parser: Box<dyn DateParser>) -> Self {
        Self { parser }
    }

    /// Resolves `input` to an interval, or `None` when it names no date.
    pub fn resolve(&self, input: &str) -> Option<DateInterval> {
        let candidates = self.parser.parse(input);

        let Some(first) = candidates.first() else {
            tracing::debug!(input, "no valid date found");
            return None;
        };
        if candidates.len() > 1 {
            tracing::debug!(
                ignored = candidates.len() - 1,
                "multiple dates in input; using the first"
            );
        }

        Some(DateInterval::from_days(first.start, first.last_day()))
    }
}

impl Default for DateRangeResolver {
    /// Natural-language parsing anchored at today's local date.
    fn default() -> Self {
        Self::new(Box::new(NaturalDateParser::new()))
    }
}
