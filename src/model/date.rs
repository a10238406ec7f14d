// File: src/model/date.rs
//! Date phrase recognition for task intake.
//!
//! The extractor walks the input word by word and tries the ordered
//! [`RECOGNIZERS`] table at each position; the leftmost hit wins, and among
//! recognizers firing at the same word the earlier entry wins. The words around
//! the hit then decide whether it names a schedule or a deadline:
//!
//!   "Call John tomorrow"        -> schedule, 2026-02-23 09:00
//!   "Submit report by Friday"   -> deadline, 2026-02-27 23:59:59
//!   "Sync at 3pm on Friday"     -> schedule, 2026-02-27 15:00
//!
//! Relative expressions resolve forwards from the reference instant; a bare
//! weekday never lands in the past.

use crate::config::ParserConfig;
use crate::model::item::{DateExtractionResult, DateKind, DateType};
use crate::model::text::{Word, excise, split_words};
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc, Weekday};

/// What a recognizer found, before any time suffix is merged in.
#[derive(Debug, Clone, Copy)]
enum Resolved {
    Day(NaiveDate),
    Instant(DateTime<Utc>),
    Time(NaiveTime),
}

/// Returns the number of words consumed starting at the given index.
type Recognizer = fn(&[Word], usize, DateTime<Utc>) -> Option<(usize, Resolved)>;

const RECOGNIZERS: &[(&str, Recognizer)] = &[
    ("iso_date", recognize_iso_date),
    ("keyword", recognize_keyword),
    ("next_unit", recognize_next_unit),
    ("this_weekday", recognize_this_weekday),
    ("in_offset", recognize_in_offset),
    ("month_day", recognize_month_day),
    ("weekday", recognize_weekday),
    ("time_of_day", recognize_time_of_day),
];

// Longest first: "due by" must win over "by".
const DEADLINE_CONNECTORS: &[&[&str]] = &[
    &["no", "later", "than"],
    &["due", "by"],
    &["due", "on"],
    &["due", "before"],
    &["due"],
    &["by"],
    &["before"],
];

const TONIGHT_HOUR: u32 = 20;

// Words that may follow a compact amount ("in 3d") without turning it into an
// ordinary word such as "3d modeling".
const COMPACT_FOLLOWERS: &[&str] = &[
    "and", "then", "or", "at", "on", "by", "for", "to", "from", "with", "before", "after",
    "please",
];

pub(crate) fn default_schedule_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}

pub(crate) fn default_deadline_time() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateExtractor {
    schedule_time: NaiveTime,
    deadline_time: NaiveTime,
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new(default_schedule_time(), default_deadline_time())
    }
}

struct Hit {
    recognizer: &'static str,
    start: usize,
    end: usize,
    /// Schedule connector ("on", "at") directly before `start`.
    lead: usize,
    value: DateType,
}

impl DateExtractor {
    /// `schedule_time` and `deadline_time` are applied to phrases that name a
    /// day without a time of day.
    pub fn new(schedule_time: NaiveTime, deadline_time: NaiveTime) -> Self {
        Self {
            schedule_time,
            deadline_time,
        }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.schedule_time(), config.deadline_time())
    }

    pub fn extract(&self, text: &str, reference: DateTime<Utc>) -> DateExtractionResult {
        let words = split_words(text);
        let Some(hit) = find_first(&words, reference) else {
            return DateExtractionResult::no_match(text);
        };

        let (kind, span_start, span_end) = classify(&words, &hit);
        let default_time = match kind {
            DateKind::Schedule => self.schedule_time,
            DateKind::Deadline => self.deadline_time,
        };
        let instant = hit.value.to_instant(default_time);
        let phrase = &text[words[hit.start].start..words[hit.end - 1].end];

        log::debug!(
            "date phrase '{}' via {} -> {} at {}",
            phrase,
            hit.recognizer,
            kind,
            instant
        );

        DateExtractionResult {
            instant: Some(instant),
            kind: Some(kind),
            matched_phrase: Some(phrase.to_string()),
            original_text: text.to_string(),
            residual_text: excise(text, words[span_start].start, words[span_end - 1].end),
        }
    }
}

/// Extracts with the default time-of-day conventions.
pub fn extract_date(text: &str, reference: DateTime<Utc>) -> DateExtractionResult {
    DateExtractor::default().extract(text, reference)
}

fn find_first(words: &[Word], reference: DateTime<Utc>) -> Option<Hit> {
    for i in 0..words.len() {
        for (name, recognize) in RECOGNIZERS {
            if let Some((len, resolved)) = recognize(words, i, reference) {
                return Some(finish_hit(words, i, len, resolved, *name, reference));
            }
        }
    }
    None
}

fn finish_hit(
    words: &[Word],
    start: usize,
    len: usize,
    resolved: Resolved,
    recognizer: &'static str,
    reference: DateTime<Utc>,
) -> Hit {
    let mut end = start + len;
    let preceded_by = |w: &str| start > 0 && words[start - 1].norm == w;

    let (value, lead) = match resolved {
        Resolved::Day(d) => {
            let value = match time_suffix(words, end) {
                Some((consumed, t)) => {
                    end += consumed;
                    DateType::Specific(d.and_time(t).and_utc())
                }
                None => DateType::AllDay(d),
            };
            (value, usize::from(preceded_by("on")))
        }
        Resolved::Instant(dt) => (DateType::Specific(dt), 0),
        Resolved::Time(t) => {
            let day = match day_after_time(words, end, reference) {
                Some((consumed, d)) => {
                    end += consumed;
                    d
                }
                None => next_day_with_time(reference, t),
            };
            (
                DateType::Specific(day.and_time(t).and_utc()),
                usize::from(preceded_by("at")),
            )
        }
    };

    Hit {
        recognizer,
        start,
        end,
        lead,
        value,
    }
}

/// Returns the kind plus the word span to excise, connectors included.
fn classify(words: &[Word], hit: &Hit) -> (DateKind, usize, usize) {
    let lead_start = hit.start - hit.lead;
    if let Some(n) = connector_ending_at(words, hit.start) {
        return (DateKind::Deadline, hit.start - n, hit.end);
    }
    if hit.lead > 0
        && let Some(n) = connector_ending_at(words, lead_start)
    {
        return (DateKind::Deadline, lead_start - n, hit.end);
    }
    if words.get(hit.end).is_some_and(|w| w.norm == "due") {
        return (DateKind::Deadline, lead_start, hit.end + 1);
    }
    (DateKind::Schedule, lead_start, hit.end)
}

fn connector_ending_at(words: &[Word], end: usize) -> Option<usize> {
    DEADLINE_CONNECTORS
        .iter()
        .find(|c| c.len() <= end && matches_seq(words, end - c.len(), c))
        .map(|c| c.len())
}

fn matches_seq(words: &[Word], i: usize, seq: &[&str]) -> bool {
    seq.iter()
        .enumerate()
        .all(|(k, s)| words.get(i + k).is_some_and(|w| w.norm == *s))
}

// --- RECOGNIZERS ---

fn recognize_iso_date(words: &[Word], i: usize, _: DateTime<Utc>) -> Option<(usize, Resolved)> {
    let d = NaiveDate::parse_from_str(&words.get(i)?.norm, "%Y-%m-%d").ok()?;
    Some((1, Resolved::Day(d)))
}

fn recognize_keyword(words: &[Word], i: usize, reference: DateTime<Utc>) -> Option<(usize, Resolved)> {
    let today = reference.date_naive();
    match words.get(i)?.norm.as_str() {
        "today" | "eod" => Some((1, Resolved::Day(today))),
        "tonight" => {
            let t = NaiveTime::from_hms_opt(TONIGHT_HOUR, 0, 0)?;
            Some((1, Resolved::Instant(today.and_time(t).and_utc())))
        }
        "tomorrow" | "tmrw" => Some((1, Resolved::Day(add_days(today, 1)?))),
        "eow" => Some((1, Resolved::Day(end_of_week(today)))),
        "eom" => Some((1, Resolved::Day(end_of_month(today)?))),
        "day" if matches_seq(words, i, &["day", "after", "tomorrow"]) => {
            Some((3, Resolved::Day(add_days(today, 2)?)))
        }
        "end" if words.get(i + 1).is_some_and(|w| w.norm == "of") => {
            let the = usize::from(words.get(i + 2).is_some_and(|w| w.norm == "the"));
            let d = match words.get(i + 2 + the)?.norm.as_str() {
                "day" => today,
                "week" => end_of_week(today),
                "month" => end_of_month(today)?,
                _ => return None,
            };
            Some((3 + the, Resolved::Day(d)))
        }
        _ => None,
    }
}

fn recognize_next_unit(words: &[Word], i: usize, reference: DateTime<Utc>) -> Option<(usize, Resolved)> {
    if words.get(i)?.norm != "next" {
        return None;
    }
    let today = reference.date_naive();
    let d = match words.get(i + 1)?.norm.as_str() {
        "week" => add_days(today, 7)?,
        "month" => today.checked_add_months(Months::new(1))?,
        "year" => today.checked_add_months(Months::new(12))?,
        other => weekday_after(today, parse_weekday_short(other)?),
    };
    Some((2, Resolved::Day(d)))
}

fn recognize_this_weekday(words: &[Word], i: usize, reference: DateTime<Utc>) -> Option<(usize, Resolved)> {
    if words.get(i)?.norm != "this" {
        return None;
    }
    let target = parse_weekday_short(&words.get(i + 1)?.norm)?;
    Some((2, Resolved::Day(weekday_on_or_after(reference.date_naive(), target))))
}

fn recognize_in_offset(words: &[Word], i: usize, reference: DateTime<Utc>) -> Option<(usize, Resolved)> {
    if words.get(i)?.norm != "in" {
        return None;
    }
    let (consumed, amount, unit) = parse_amount_and_unit(words, i + 1)?;
    let today = reference.date_naive();
    let value = match unit {
        Unit::Minute => {
            Resolved::Instant(reference.checked_add_signed(Duration::minutes(amount.into()))?)
        }
        Unit::Hour => {
            Resolved::Instant(reference.checked_add_signed(Duration::hours(amount.into()))?)
        }
        Unit::Day => Resolved::Day(add_days(today, amount.into())?),
        Unit::Week => Resolved::Day(add_days(today, i64::from(amount) * 7)?),
        Unit::Month => Resolved::Day(today.checked_add_months(Months::new(amount))?),
        Unit::Year => {
            Resolved::Day(today.checked_add_months(Months::new(amount.checked_mul(12)?))?)
        }
    };
    Some((1 + consumed, value))
}

fn recognize_month_day(words: &[Word], i: usize, reference: DateTime<Utc>) -> Option<(usize, Resolved)> {
    let today = reference.date_naive();
    let first = &words.get(i)?.norm;

    // "March 5", "Mar 5th", "March 5, 2027"
    if let Some(month) = parse_month(first) {
        let day = parse_day_number(&words.get(i + 1)?.norm)?;
        let (year_len, year) = explicit_year(words, i + 2);
        let d = resolve_month_day(month, day, year, today)?;
        return Some((2 + year_len, Resolved::Day(d)));
    }

    // "5 March", "5th of March"
    let day = parse_day_number(first)?;
    let of = usize::from(words.get(i + 1).is_some_and(|w| w.norm == "of"));
    let month_word = &words.get(i + 1 + of)?.norm;
    let month = parse_month(month_word)?;
    // "2 may poles": a plain number before "may" is not a date.
    let ordinal = first.ends_with(|c: char| c.is_alphabetic());
    if month_word == "may" && of == 0 && !ordinal {
        return None;
    }
    let (year_len, year) = explicit_year(words, i + 2 + of);
    let d = resolve_month_day(month, day, year, today)?;
    Some((2 + of + year_len, Resolved::Day(d)))
}

fn recognize_weekday(words: &[Word], i: usize, reference: DateTime<Utc>) -> Option<(usize, Resolved)> {
    let target = parse_weekday(&words.get(i)?.norm)?;
    Some((1, Resolved::Day(weekday_on_or_after(reference.date_naive(), target))))
}

fn recognize_time_of_day(words: &[Word], i: usize, _: DateTime<Utc>) -> Option<(usize, Resolved)> {
    // A bare "3:16" is a verse or a score unless "at" introduces it.
    let clock = i > 0 && words[i - 1].norm == "at";
    let (len, t) = time_at(words, i, clock)?;
    Some((len, Resolved::Time(t)))
}

// --- TIME HELPERS ---

/// Optional "at" followed by a time, directly after a day phrase.
fn time_suffix(words: &[Word], i: usize) -> Option<(usize, NaiveTime)> {
    let at = usize::from(words.get(i).is_some_and(|w| w.norm == "at"));
    let (len, t) = time_at(words, i + at, true)?;
    Some((at + len, t))
}

/// A day phrase directly after a time ("3pm tomorrow", "3pm on Friday").
fn day_after_time(words: &[Word], i: usize, reference: DateTime<Utc>) -> Option<(usize, NaiveDate)> {
    let on = usize::from(words.get(i).is_some_and(|w| w.norm == "on"));
    RECOGNIZERS
        .iter()
        .filter(|(name, _)| *name != "time_of_day")
        .find_map(|(_, recognize)| match recognize(words, i + on, reference) {
            Some((len, Resolved::Day(d))) => Some((on + len, d)),
            _ => None,
        })
}

/// Today if the time has not passed yet, otherwise tomorrow.
fn next_day_with_time(reference: DateTime<Utc>, t: NaiveTime) -> NaiveDate {
    let today = reference.date_naive();
    if t >= reference.time() {
        today
    } else {
        add_days(today, 1).unwrap_or(today)
    }
}

/// `clock` allows the 24h "15:30" form, which is only trusted after "at" or
/// a day phrase.
fn time_at(words: &[Word], i: usize, clock: bool) -> Option<(usize, NaiveTime)> {
    let word = &words.get(i)?.norm;
    if let Some(t) = parse_time_string(word) {
        return Some((1, t));
    }
    if clock && let Some(t) = parse_24h(word) {
        return Some((1, t));
    }
    // "3 pm", "3:30 p.m."
    let is_pm = match words.get(i + 1)?.norm.as_str() {
        "pm" | "p.m" => true,
        "am" | "a.m" => false,
        _ => return None,
    };
    parse_12h(word, is_pm).map(|t| (2, t))
}

fn parse_time_string(s: &str) -> Option<NaiveTime> {
    match s {
        "noon" | "midday" => return NaiveTime::from_hms_opt(12, 0, 0),
        "midnight" => return NaiveTime::from_hms_opt(0, 0, 0),
        _ => {}
    }
    if let Some(stripped) = s.strip_suffix("am").or_else(|| s.strip_suffix("a.m")) {
        return parse_12h(stripped, false);
    }
    if let Some(stripped) = s.strip_suffix("pm").or_else(|| s.strip_suffix("p.m")) {
        return parse_12h(stripped, true);
    }
    None
}

/// 24h clock with explicit minutes: "15:30", "9:05".
fn parse_24h(s: &str) -> Option<NaiveTime> {
    let (h_str, m_str) = s.split_once(':')?;
    if m_str.len() != 2 {
        return None;
    }
    NaiveTime::from_hms_opt(h_str.parse().ok()?, m_str.parse().ok()?, 0)
}

fn parse_12h(s: &str, is_pm: bool) -> Option<NaiveTime> {
    let (h, m) = if let Some((h_str, m_str)) = s.split_once(':') {
        (h_str.parse::<u32>().ok()?, m_str.parse::<u32>().ok()?)
    } else {
        (s.parse::<u32>().ok()?, 0)
    };
    if !(1..=12).contains(&h) || m > 59 {
        return None;
    }
    let h_24 = match (h, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };
    NaiveTime::from_hms_opt(h_24, m, 0)
}

// --- DATE HELPERS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

fn parse_unit(s: &str) -> Option<Unit> {
    match s {
        "m" | "min" | "mins" | "minute" | "minutes" => Some(Unit::Minute),
        "h" | "hr" | "hrs" | "hour" | "hours" => Some(Unit::Hour),
        "d" | "day" | "days" => Some(Unit::Day),
        "w" | "wk" | "wks" | "week" | "weeks" => Some(Unit::Week),
        "mo" | "month" | "months" => Some(Unit::Month),
        "y" | "yr" | "yrs" | "year" | "years" => Some(Unit::Year),
        _ => None,
    }
}

/// "3 days", "two weeks", "an hour" or the compact "3d".
fn parse_amount_and_unit(words: &[Word], i: usize) -> Option<(usize, u32, Unit)> {
    let first = &words.get(i)?.norm;
    if let Some(amount) = parse_english_number(first)
        && let Some(unit) = words.get(i + 1).and_then(|w| parse_unit(&w.norm))
    {
        return Some((2, amount, unit));
    }
    let idx = first.find(|c: char| !c.is_ascii_digit())?;
    let (amt_str, unit_str) = first.split_at(idx);
    let amount = amt_str.parse::<u32>().ok()?;
    let unit = parse_unit(unit_str)?;
    let standalone = words[i].clause_end
        || words.get(i + 1).is_none_or(|next| {
            !next.norm.starts_with(char::is_alphabetic)
                || COMPACT_FOLLOWERS.contains(&next.norm.as_str())
        });
    standalone.then_some((1, amount, unit))
}

fn parse_english_number(s: &str) -> Option<u32> {
    match s {
        "a" | "an" | "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        "seven" => Some(7),
        "eight" => Some(8),
        "nine" => Some(9),
        "ten" => Some(10),
        "eleven" => Some(11),
        "twelve" => Some(12),
        _ => s.parse::<u32>().ok(),
    }
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
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

/// Abbreviations are only safe after "next"/"this"; bare "sun" or "wed" is too
/// often an ordinary word.
fn parse_weekday_short(s: &str) -> Option<Weekday> {
    parse_weekday(s).or(match s {
        "mon" => Some(Weekday::Mon),
        "tue" | "tues" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        "sun" => Some(Weekday::Sun),
        _ => None,
    })
}

fn parse_month(s: &str) -> Option<u32> {
    // "jan" and "mar" collide with names and words; only the full spellings count.
    match s {
        "january" => Some(1),
        "february" | "feb" => Some(2),
        "march" => Some(3),
        "april" | "apr" => Some(4),
        "may" => Some(5),
        "june" | "jun" => Some(6),
        "july" | "jul" => Some(7),
        "august" | "aug" => Some(8),
        "september" | "sep" | "sept" => Some(9),
        "october" | "oct" => Some(10),
        "november" | "nov" => Some(11),
        "december" | "dec" => Some(12),
        _ => None,
    }
}

fn parse_day_number(s: &str) -> Option<u32> {
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix))
        .unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let day = digits.parse::<u32>().ok()?;
    (1..=31).contains(&day).then_some(day)
}

fn explicit_year(words: &[Word], i: usize) -> (usize, Option<i32>) {
    match words.get(i).map(|w| w.norm.as_str()) {
        Some(s) if s.len() == 4 => match s.parse::<i32>() {
            Ok(y) if (1970..=2999).contains(&y) => (1, Some(y)),
            _ => (0, None),
        },
        _ => (0, None),
    }
}

/// Without an explicit year the date rolls over to next year once passed.
fn resolve_month_day(month: u32, day: u32, year: Option<i32>, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(y) = year {
        return NaiveDate::from_ymd_opt(y, month, day);
    }
    match NaiveDate::from_ymd_opt(today.year(), month, day) {
        Some(d) if d >= today => Some(d),
        _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
    }
}

fn add_days(d: NaiveDate, n: i64) -> Option<NaiveDate> {
    d.checked_add_signed(Duration::days(n))
}

fn weekday_on_or_after(from: NaiveDate, target: Weekday) -> NaiveDate {
    let ahead = (7 + target.num_days_from_monday() - from.weekday().num_days_from_monday()) % 7;
    add_days(from, ahead.into()).unwrap_or(from)
}

fn weekday_after(from: NaiveDate, target: Weekday) -> NaiveDate {
    let d = weekday_on_or_after(from, target);
    if d == from {
        add_days(from, 7).unwrap_or(from)
    } else {
        d
    }
}

fn end_of_week(today: NaiveDate) -> NaiveDate {
    weekday_on_or_after(today, Weekday::Fri)
}

fn end_of_month(today: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sunday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 22, 10, 0, 0).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_time_string() {
        assert_eq!(parse_time_string("3pm"), NaiveTime::from_hms_opt(15, 0, 0));
        assert_eq!(parse_time_string("12am"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_time_string("9:30am"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time_string("15:30"), None);
        assert_eq!(parse_24h("15:30"), NaiveTime::from_hms_opt(15, 30, 0));
        assert_eq!(parse_24h("3:2"), None);
        assert_eq!(parse_time_string("noon"), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(parse_time_string("3:2"), None);
        assert_eq!(parse_time_string("13pm"), None);
        assert_eq!(parse_time_string("program"), None);
    }

    #[test]
    fn test_weekday_resolution_is_forward_biased() {
        let sun = ymd(2026, 2, 22);
        assert_eq!(weekday_on_or_after(sun, Weekday::Fri), ymd(2026, 2, 27));
        assert_eq!(weekday_on_or_after(sun, Weekday::Sun), sun);
        assert_eq!(weekday_after(sun, Weekday::Sun), ymd(2026, 3, 1));
        assert_eq!(weekday_after(sun, Weekday::Mon), ymd(2026, 2, 23));
    }

    #[test]
    fn test_end_of_month() {
        assert_eq!(end_of_month(ymd(2026, 2, 22)), Some(ymd(2026, 2, 28)));
        assert_eq!(end_of_month(ymd(2028, 2, 1)), Some(ymd(2028, 2, 29)));
        assert_eq!(end_of_month(ymd(2026, 12, 5)), Some(ymd(2026, 12, 31)));
    }

    #[test]
    fn test_month_day_rolls_forward() {
        let today = ymd(2026, 2, 22);
        assert_eq!(resolve_month_day(1, 5, None, today), Some(ymd(2027, 1, 5)));
        assert_eq!(resolve_month_day(3, 5, None, today), Some(ymd(2026, 3, 5)));
        assert_eq!(resolve_month_day(1, 5, Some(2026), today), Some(ymd(2026, 1, 5)));
        assert_eq!(resolve_month_day(2, 30, None, today), None);
    }

    #[test]
    fn test_amount_and_unit_forms() {
        let words = split_words("3 days two weeks an hour 5d");
        assert_eq!(parse_amount_and_unit(&words, 0), Some((2, 3, Unit::Day)));
        assert_eq!(parse_amount_and_unit(&words, 2), Some((2, 2, Unit::Week)));
        assert_eq!(parse_amount_and_unit(&words, 4), Some((2, 1, Unit::Hour)));
        assert_eq!(parse_amount_and_unit(&words, 6), Some((1, 5, Unit::Day)));

        let words = split_words("3d modeling, 2h then 4w.");
        assert_eq!(parse_amount_and_unit(&words, 0), None);
        assert_eq!(parse_amount_and_unit(&words, 2), Some((1, 2, Unit::Hour)));
        assert_eq!(parse_amount_and_unit(&words, 4), Some((1, 4, Unit::Week)));
    }

    #[test]
    fn test_recognizer_order_prefers_leftmost() {
        let words = split_words("call friday or tomorrow");
        let hit = find_first(&words, sunday()).unwrap();
        assert_eq!(hit.recognizer, "weekday");
        assert_eq!(hit.start, 1);
    }

    #[test]
    fn test_connector_longest_first() {
        let words = split_words("report due by friday");
        assert_eq!(connector_ending_at(&words, 3), Some(2));
        let words = split_words("report no later than friday");
        assert_eq!(connector_ending_at(&words, 4), Some(3));
        let words = split_words("meet friday");
        assert_eq!(connector_ending_at(&words, 1), None);
    }
}
