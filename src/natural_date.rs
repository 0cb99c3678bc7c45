//! Built-in natural-language date parser.
//!
//! Recognises the date phrasing people actually type when asking about their
//! journal: absolute dates (`2023-01-15`, `15 jan 2023`, `january 15th`),
//! whole periods (`march 2023`, `2022`, `last month`), relative dates
//! (`3 weeks ago`, `yesterday`, `last friday`) and rolling windows
//! (`past 10 days`). Two expressions joined by `to`, `until`, `through`,
//! `-` or `between … and …` form a range that ends on the last day of the
//! second expression.
//!
//! All relative phrases are computed against a fixed reference date, so the
//! parser is deterministic for a given reference.

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};

use crate::date_range::DateParser;
use crate::models::ParsedDate;

#[derive(Debug, Clone, Copy)]
pub struct NaturalDateParser {
    reference: NaiveDate,
}

impl NaturalDateParser {
    /// Parser anchored at today's local date.
    pub fn new() -> Self {
        Self::with_reference(Local::now().date_naive())
    }

    pub fn with_reference(reference: NaiveDate) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Matches one date expression at the head of `tokens`. A bare year
    /// only counts when `allow_year` is set.
    fn term(&self, tokens: &[&str], allow_year: bool) -> Option<Term> {
        let head = *tokens.first()?;

        if let Some(date) = numeric_date(head) {
            return Some(Term::new(ParsedDate::day(date), 1));
        }

        let keyword = match head {
            "today" | "now" | "tonight" => Some(self.reference),
            "yesterday" => Some(self.reference.pred_opt()?),
            "tomorrow" => Some(self.reference.succ_opt()?),
            _ => None,
        };
        if let Some(date) = keyword {
            return Some(Term::new(ParsedDate::day(date), 1));
        }

        self.ago(tokens)
            .or_else(|| self.relative(tokens))
            .or_else(|| self.weekday(tokens))
            .map(|(date, used)| Term::new(date, used))
            .or_else(|| self.day_first(tokens))
            .or_else(|| self.month_first(tokens))
            .or_else(|| {
                whole_year(head)
                    .filter(|_| allow_year)
                    .map(|p| Term::new(p, 1))
            })
    }

    /// A four-digit number reads as a year only on its own, after a
    /// preposition such as `in` or `since`, or as one end of a range.
    fn bare_year_allowed(&self, tokens: &[&str], at: usize) -> bool {
        if tokens.len() == 1 {
            return true;
        }
        if at > 0 && YEAR_PREPOSITIONS.contains(&tokens[at - 1]) {
            return true;
        }
        let after_between = at > 0 && tokens[at - 1] == "between";
        match tokens.get(at + 1) {
            Some(connector) if is_range_connector(connector, after_between) => {
                self.term(&tokens[at + 2..], true).is_some()
            }
            _ => false,
        }
    }

    /// `3 days ago`, `a month ago`.
    fn ago(&self, tokens: &[&str]) -> Option<(ParsedDate, usize)> {
        let count = parse_count(tokens.first()?)?;
        let unit = parse_unit(tokens.get(1)?)?;
        if *tokens.get(2)? != "ago" {
            return None;
        }
        let date = shift_back(self.reference, unit, count)?;
        Some((ParsedDate::day(date), 3))
    }

    /// `last week`, `this month`, `past 10 days`, `next 2 weeks`.
    fn relative(&self, tokens: &[&str]) -> Option<(ParsedDate, usize)> {
        let direction = match *tokens.first()? {
            "last" | "past" | "previous" => Direction::Back,
            "this" | "current" => Direction::Current,
            "next" | "coming" => Direction::Forward,
            _ => return None,
        };
        let second = *tokens.get(1)?;

        if let Some(unit) = parse_unit(second) {
            return self.period(unit, direction).map(|p| (p, 2));
        }

        let count = parse_count(second)?;
        let unit = parse_unit(tokens.get(2)?)?;
        let window = match direction {
            Direction::Back | Direction::Current => {
                ParsedDate::span(shift_back(self.reference, unit, count)?, self.reference)
            }
            Direction::Forward => {
                ParsedDate::span(self.reference, shift_forward(self.reference, unit, count)?)
            }
        };
        Some((window, 3))
    }

    /// The calendar week, month or year before, containing, or after the
    /// reference date. Weeks start on Monday.
    fn period(&self, unit: Unit, direction: Direction) -> Option<ParsedDate> {
        let r = self.reference;
        match unit {
            Unit::Day => match direction {
                Direction::Back => Some(ParsedDate::day(r.pred_opt()?)),
                Direction::Current => Some(ParsedDate::day(r)),
                Direction::Forward => Some(ParsedDate::day(r.succ_opt()?)),
            },
            Unit::Week => {
                let monday =
                    r.checked_sub_days(Days::new(r.weekday().num_days_from_monday() as u64))?;
                let monday = match direction {
                    Direction::Back => monday.checked_sub_days(Days::new(7))?,
                    Direction::Current => monday,
                    Direction::Forward => monday.checked_add_days(Days::new(7))?,
                };
                Some(ParsedDate::span(monday, monday.checked_add_days(Days::new(6))?))
            }
            Unit::Month => {
                let first = r.with_day(1)?;
                let first = match direction {
                    Direction::Back => first.checked_sub_months(Months::new(1))?,
                    Direction::Current => first,
                    Direction::Forward => first.checked_add_months(Months::new(1))?,
                };
                whole_month(first.year(), first.month())
            }
            Unit::Year => {
                let year = match direction {
                    Direction::Back => r.year() - 1,
                    Direction::Current => r.year(),
                    Direction::Forward => r.year() + 1,
                };
                Some(ParsedDate::span(
                    NaiveDate::from_ymd_opt(year, 1, 1)?,
                    NaiveDate::from_ymd_opt(year, 12, 31)?,
                ))
            }
        }
    }

    /// `friday` (today counts), `last friday`, `this friday`, `next friday`.
    fn weekday(&self, tokens: &[&str]) -> Option<(ParsedDate, usize)> {
        let r = self.reference;
        let today = r.weekday().num_days_from_monday();

        if let Some(day) = parse_weekday(tokens.first()?) {
            let back = (today + 7 - day.num_days_from_monday()) % 7;
            let date = r.checked_sub_days(Days::new(back as u64))?;
            return Some((ParsedDate::day(date), 1));
        }

        let day = parse_weekday(tokens.get(1)?)?;
        let target = day.num_days_from_monday();
        let date = match *tokens.first()? {
            "last" | "previous" | "past" => {
                let back = match (today + 7 - target) % 7 {
                    0 => 7,
                    n => n,
                };
                r.checked_sub_days(Days::new(back as u64))?
            }
            "this" => {
                let monday = r.checked_sub_days(Days::new(today as u64))?;
                monday.checked_add_days(Days::new(target as u64))?
            }
            "next" | "coming" => {
                let ahead = match (target + 7 - today) % 7 {
                    0 => 7,
                    n => n,
                };
                r.checked_add_days(Days::new(ahead as u64))?
            }
            _ => return None,
        };
        Some((ParsedDate::day(date), 2))
    }

    /// `15 jan`, `15th of january 2023`.
    fn day_first(&self, tokens: &[&str]) -> Option<Term> {
        let day = parse_day(tokens.first()?)?;
        let mut used = 1;
        if tokens.get(used) == Some(&"of") {
            used += 1;
        }
        let month = parse_month(tokens.get(used)?)?;
        used += 1;

        match tokens.get(used).and_then(|t| parse_year(t)) {
            Some(year) => {
                let date = clamped_date(year, month, day)?;
                Some(Term::new(ParsedDate::day(date), used + 1))
            }
            None => Term::yearless(self.reference.year(), month, Some(day), used),
        }
    }

    /// `jan 15`, `january 15th 2023`, `march 2023`, `december`.
    fn month_first(&self, tokens: &[&str]) -> Option<Term> {
        let head = *tokens.first()?;
        let month = parse_month(head)?;

        if let Some(day) = tokens.get(1).and_then(|t| parse_day(t)) {
            return match tokens.get(2).and_then(|t| parse_year(t)) {
                Some(year) => {
                    let date = clamped_date(year, month, day)?;
                    Some(Term::new(ParsedDate::day(date), 3))
                }
                None => Term::yearless(self.reference.year(), month, Some(day), 2),
            };
        }

        if let Some(year) = tokens.get(1).and_then(|t| parse_year(t)) {
            return whole_month(year, month).map(|p| Term::new(p, 2));
        }

        // "may" is far more often a verb than a month.
        if head.len() > 3 && head != "may" {
            return Term::yearless(self.reference.year(), month, None, 1);
        }

        None
    }
}

impl Default for NaturalDateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DateParser for NaturalDateParser {
    fn parse(&self, text: &str) -> Vec<ParsedDate> {
        let lowered = text.to_lowercase().replace(',', " ");
        let tokens: Vec<&str> = lowered
            .split_whitespace()
            .map(|t| {
                t.trim_matches(|c: char| matches!(c, '.' | '?' | '!' | ';' | ':' | '(' | ')' | '"'))
            })
            .filter(|t| !t.is_empty())
            .collect();

        let mut found = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let allow_year =
                parse_year(tokens[i]).is_some() && self.bare_year_allowed(&tokens, i);
            let Some(first) = self.term(&tokens[i..], allow_year) else {
                i += 1;
                continue;
            };
            let mut next = i + first.used;
            let mut candidate = first.date;

            let after_between = i > 0 && tokens[i - 1] == "between";
            if let Some(connector) = tokens.get(next) {
                if is_range_connector(connector, after_between) {
                    if let Some(second) = self.term(&tokens[next + 1..], true) {
                        if let Some(range) = join_range(&first, &second) {
                            candidate = range;
                            next += 1 + second.used;
                        }
                    }
                }
            }

            found.push(candidate);
            i = next;
        }
        found
    }
}

const YEAR_PREPOSITIONS: [&str; 6] = ["in", "during", "of", "since", "from", "between"];

/// One matched expression and the number of tokens it consumed.
#[derive(Debug, Clone, Copy)]
struct Term {
    date: ParsedDate,
    used: usize,
    /// Month and day of a date written without a year. `date` holds it in
    /// the reference year; a day of `None` means the whole month.
    yearless: Option<(u32, Option<u32>)>,
}

impl Term {
    fn new(date: ParsedDate, used: usize) -> Self {
        Self {
            date,
            used,
            yearless: None,
        }
    }

    fn yearless(year: i32, month: u32, day: Option<u32>, used: usize) -> Option<Self> {
        Some(Self {
            date: month_or_day(year, month, day)?,
            used,
            yearless: Some((month, day)),
        })
    }

    /// The same month and day placed in `year`. Dated terms stay as they are.
    fn in_year(&self, year: i32) -> Option<ParsedDate> {
        match self.yearless {
            Some((month, day)) => month_or_day(year, month, day),
            None => Some(self.date),
        }
    }
}

/// Joins two endpoints. A start without a year takes the end's year, and a
/// year earlier if that would put it after the end (`dec 20 to jan 5`). An
/// end without a year after a dated start moves forward the same way. Two
/// dated endpoints are kept as written.
fn join_range(first: &Term, second: &Term) -> Option<ParsedDate> {
    if first.yearless.is_some() {
        let end = second.date.last_day();
        let mut start = first.in_year(end.year())?;
        if start.start > end {
            start = first.in_year(end.year() - 1)?;
        }
        return Some(ParsedDate::span(start.start, end));
    }

    let start = first.date.start;
    let mut end = second.date;
    if second.yearless.is_some() {
        end = second.in_year(start.year())?;
        if end.last_day() < start {
            end = second.in_year(start.year() + 1)?;
        }
    }
    Some(ParsedDate::span(start, end.last_day()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Back,
    Current,
    Forward,
}

fn is_range_connector(token: &str, after_between: bool) -> bool {
    match token {
        "to" | "until" | "till" | "til" | "through" | "thru" | "-" | "–" | "—" => true,
        "and" => after_between,
        _ => false,
    }
}

/// `2023-01-15`, `2023/01/15`, `1/15/2023`.
fn numeric_date(token: &str) -> Option<NaiveDate> {
    let sep = if token.contains('-') { '-' } else { '/' };
    let parts: Vec<&str> = token.split(sep).collect();
    if parts.len() != 3
        || parts
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    let nums: Vec<u32> = parts.iter().map(|p| p.parse().ok()).collect::<Option<_>>()?;

    if parts[0].len() == 4 {
        NaiveDate::from_ymd_opt(nums[0] as i32, nums[1], nums[2])
    } else if parts[2].len() == 4 && sep == '/' {
        NaiveDate::from_ymd_opt(nums[2] as i32, nums[0], nums[1])
    } else {
        None
    }
}

fn whole_year(token: &str) -> Option<ParsedDate> {
    let year = parse_year(token)?;
    if !(1900..=2999).contains(&year) {
        return None;
    }
    Some(ParsedDate::span(
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

fn month_or_day(year: i32, month: u32, day: Option<u32>) -> Option<ParsedDate> {
    match day {
        Some(day) => clamped_date(year, month, day).map(ParsedDate::day),
        None => whole_month(year, month),
    }
}

fn whole_month(year: i32, month: u32) -> Option<ParsedDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some(ParsedDate::span(first, last))
}

/// Days past the end of the month snap to its last day, so `31 feb` means
/// the end of February.
fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last = whole_month(year, month)?.last_day();
    NaiveDate::from_ymd_opt(year, month, day.min(last.day()))
}

fn shift_back(from: NaiveDate, unit: Unit, count: u32) -> Option<NaiveDate> {
    match unit {
        Unit::Day => from.checked_sub_days(Days::new(count as u64)),
        Unit::Week => from.checked_sub_days(Days::new(count as u64 * 7)),
        Unit::Month => from.checked_sub_months(Months::new(count)),
        Unit::Year => from.checked_sub_months(Months::new(count.checked_mul(12)?)),
    }
}

fn shift_forward(from: NaiveDate, unit: Unit, count: u32) -> Option<NaiveDate> {
    match unit {
        Unit::Day => from.checked_add_days(Days::new(count as u64)),
        Unit::Week => from.checked_add_days(Days::new(count as u64 * 7)),
        Unit::Month => from.checked_add_months(Months::new(count)),
        Unit::Year => from.checked_add_months(Months::new(count.checked_mul(12)?)),
    }
}

fn parse_unit(token: &str) -> Option<Unit> {
    match token {
        "day" | "days" => Some(Unit::Day),
        "week" | "weeks" => Some(Unit::Week),
        "month" | "months" => Some(Unit::Month),
        "year" | "years" => Some(Unit::Year),
        _ => None,
    }
}

fn parse_count(token: &str) -> Option<u32> {
    let n = match token {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        digits if digits.len() <= 5 && digits.bytes().all(|b| b.is_ascii_digit()) => {
            digits.parse().ok()?
        }
        _ => return None,
    };
    Some(n)
}

fn parse_day(token: &str) -> Option<u32> {
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(token);
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day: u32 = digits.parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

fn parse_year(token: &str) -> Option<i32> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn parse_month(token: &str) -> Option<u32> {
    let month = match token {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(month)
}

fn parse_weekday(token: &str) -> Option<Weekday> {
    match token {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Wednesday
    fn parser() -> NaturalDateParser {
        NaturalDateParser::with_reference(ymd(2024, 5, 15))
    }

    fn first(text: &str) -> ParsedDate {
        parser()
            .parse(text)
            .into_iter()
            .next()
            .unwrap_or_else(|| panic!("no date found in {:?}", text))
    }

    #[test]
    fn test_no_dates() {
        assert!(parser().parse("").is_empty());
        assert!(parser().parse("how was my week overall?").is_empty());
        assert!(parser().parse("I had 3 coffees").is_empty());
        assert!(parser().parse("may I ask something").is_empty());
    }

    #[test]
    fn test_numeric_dates() {
        assert_eq!(first("2023-01-15"), ParsedDate::day(ymd(2023, 1, 15)));
        assert_eq!(first("2023/01/15"), ParsedDate::day(ymd(2023, 1, 15)));
        assert_eq!(first("1/15/2023"), ParsedDate::day(ymd(2023, 1, 15)));
        assert!(parser().parse("2023-13-01").is_empty());
    }

    #[test]
    fn test_written_dates() {
        assert_eq!(first("1 jan 2023"), ParsedDate::day(ymd(2023, 1, 1)));
        assert_eq!(first("1st of January, 2023"), ParsedDate::day(ymd(2023, 1, 1)));
        assert_eq!(first("Jan 15, 2023"), ParsedDate::day(ymd(2023, 1, 15)));
        assert_eq!(first("march 3rd"), ParsedDate::day(ymd(2024, 3, 3)));
        assert_eq!(first("3 march"), ParsedDate::day(ymd(2024, 3, 3)));
    }

    #[test]
    fn test_overflowing_day_snaps_to_month_end() {
        assert_eq!(first("31 feb 2023"), ParsedDate::day(ymd(2023, 2, 28)));
        assert_eq!(first("feb 30 2024"), ParsedDate::day(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_whole_periods() {
        assert_eq!(
            first("march 2023"),
            ParsedDate::span(ymd(2023, 3, 1), ymd(2023, 3, 31))
        );
        assert_eq!(
            first("in february"),
            ParsedDate::span(ymd(2024, 2, 1), ymd(2024, 2, 29))
        );
        assert_eq!(
            first("during 2022"),
            ParsedDate::span(ymd(2022, 1, 1), ymd(2022, 12, 31))
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(first("today"), ParsedDate::day(ymd(2024, 5, 15)));
        assert_eq!(first("yesterday"), ParsedDate::day(ymd(2024, 5, 14)));
        assert_eq!(first("tomorrow"), ParsedDate::day(ymd(2024, 5, 16)));
    }

    #[test]
    fn test_ago() {
        assert_eq!(first("3 days ago"), ParsedDate::day(ymd(2024, 5, 12)));
        assert_eq!(first("a week ago"), ParsedDate::day(ymd(2024, 5, 8)));
        assert_eq!(first("two months ago"), ParsedDate::day(ymd(2024, 3, 15)));
        assert_eq!(first("1 year ago"), ParsedDate::day(ymd(2023, 5, 15)));
    }

    #[test]
    fn test_relative_periods() {
        assert_eq!(
            first("last week"),
            ParsedDate::span(ymd(2024, 5, 6), ymd(2024, 5, 12))
        );
        assert_eq!(
            first("this week"),
            ParsedDate::span(ymd(2024, 5, 13), ymd(2024, 5, 19))
        );
        assert_eq!(
            first("last month"),
            ParsedDate::span(ymd(2024, 4, 1), ymd(2024, 4, 30))
        );
        assert_eq!(
            first("next month"),
            ParsedDate::span(ymd(2024, 6, 1), ymd(2024, 6, 30))
        );
        assert_eq!(
            first("last year"),
            ParsedDate::span(ymd(2023, 1, 1), ymd(2023, 12, 31))
        );
    }

    #[test]
    fn test_rolling_windows() {
        assert_eq!(
            first("past 10 days"),
            ParsedDate::span(ymd(2024, 5, 5), ymd(2024, 5, 15))
        );
        assert_eq!(
            first("last 2 weeks"),
            ParsedDate::span(ymd(2024, 5, 1), ymd(2024, 5, 15))
        );
        assert_eq!(
            first("next 3 days"),
            ParsedDate::span(ymd(2024, 5, 15), ymd(2024, 5, 18))
        );
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(first("wednesday"), ParsedDate::day(ymd(2024, 5, 15)));
        assert_eq!(first("monday"), ParsedDate::day(ymd(2024, 5, 13)));
        assert_eq!(first("last wednesday"), ParsedDate::day(ymd(2024, 5, 8)));
        assert_eq!(first("last friday"), ParsedDate::day(ymd(2024, 5, 10)));
        assert_eq!(first("next monday"), ParsedDate::day(ymd(2024, 5, 20)));
        assert_eq!(first("this friday"), ParsedDate::day(ymd(2024, 5, 17)));
    }

    #[test]
    fn test_ranges() {
        assert_eq!(
            first("1 jan 2023 to 31 jan 2023"),
            ParsedDate::span(ymd(2023, 1, 1), ymd(2023, 1, 31))
        );
        assert_eq!(
            first("2 months ago to today"),
            ParsedDate::span(ymd(2024, 3, 15), ymd(2024, 5, 15))
        );
        assert_eq!(
            first("from 2023-01-01 until 2023-02-01"),
            ParsedDate::span(ymd(2023, 1, 1), ymd(2023, 2, 1))
        );
        assert_eq!(
            first("between march 2023 and may 2023"),
            ParsedDate::span(ymd(2023, 3, 1), ymd(2023, 5, 31))
        );
        assert_eq!(
            first("jan 1 2023 - jan 5 2023"),
            ParsedDate::span(ymd(2023, 1, 1), ymd(2023, 1, 5))
        );
    }

    #[test]
    fn test_range_start_without_year_takes_end_year() {
        assert_eq!(
            first("jan 1 to jan 31 2023"),
            ParsedDate::span(ymd(2023, 1, 1), ymd(2023, 1, 31))
        );
        assert_eq!(
            first("1 jan to 31 jan 2023"),
            ParsedDate::span(ymd(2023, 1, 1), ymd(2023, 1, 31))
        );
        assert_eq!(
            first("march to may 2023"),
            ParsedDate::span(ymd(2023, 3, 1), ymd(2023, 5, 31))
        );
    }

    #[test]
    fn test_yearless_range_crosses_new_year() {
        assert_eq!(
            first("dec 20 to jan 5"),
            ParsedDate::span(ymd(2023, 12, 20), ymd(2024, 1, 5))
        );
        assert_eq!(
            first("december 20 to today"),
            ParsedDate::span(ymd(2023, 12, 20), ymd(2024, 5, 15))
        );
        assert_eq!(
            first("2023-12-20 to jan 5"),
            ParsedDate::span(ymd(2023, 12, 20), ymd(2024, 1, 5))
        );
    }

    #[test]
    fn test_dated_endpoints_kept_as_written() {
        assert_eq!(
            first("jan 31 2023 to jan 1 2023"),
            ParsedDate::span(ymd(2023, 1, 31), ymd(2023, 1, 1))
        );
    }

    #[test]
    fn test_bare_year_needs_context() {
        assert_eq!(first("I ran 2000 meters today"), ParsedDate::day(ymd(2024, 5, 15)));
        assert!(parser().parse("wrote 1500 words").is_empty());
        assert_eq!(
            first("2022"),
            ParsedDate::span(ymd(2022, 1, 1), ymd(2022, 12, 31))
        );
        assert_eq!(
            first("everything since 2021"),
            ParsedDate::span(ymd(2021, 1, 1), ymd(2021, 12, 31))
        );
        assert_eq!(
            first("2021 to 2022"),
            ParsedDate::span(ymd(2021, 1, 1), ymd(2022, 12, 31))
        );
        assert_eq!(
            first("between 2020 and 2021"),
            ParsedDate::span(ymd(2020, 1, 1), ymd(2021, 12, 31))
        );
    }

    #[test]
    fn test_and_without_between_is_two_candidates() {
        let found = parser().parse("march 2023 and june 2023");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], ParsedDate::span(ymd(2023, 3, 1), ymd(2023, 3, 31)));
        assert_eq!(found[1], ParsedDate::span(ymd(2023, 6, 1), ymd(2023, 6, 30)));
    }

    #[test]
    fn test_dangling_connector_keeps_first_date() {
        assert_eq!(first("2023-01-01 to whenever"), ParsedDate::day(ymd(2023, 1, 1)));
    }
}
