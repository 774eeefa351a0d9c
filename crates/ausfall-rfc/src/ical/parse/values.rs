//! Value type parsers for iCalendar (RFC 5545 §3.3).

use chrono::{NaiveDate, NaiveTime};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::ical::core::{DateTime, DateTimeForm};

/// Parses a fixed-width run of ASCII digits.
fn digits<T: std::str::FromStr>(s: &str, range: std::ops::Range<usize>) -> Option<T> {
    let part = s.get(range)?;
    if part.bytes().all(|b| b.is_ascii_digit()) {
        part.parse().ok()
    } else {
        None
    }
}

/// Parses a DATE value (RFC 5545 §3.3.4).
///
/// Format: YYYYMMDD (e.g., "19970714"). Dates that do not exist in the
/// proleptic Gregorian calendar (Feb 30) are rejected.
///
/// ## Errors
/// Returns an error if the string is not a valid 8-digit date.
pub fn parse_date(s: &str, line: usize, col: usize) -> ParseResult<NaiveDate> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidDate, line, col);

    if s.len() != 8 {
        return Err(invalid().with_context(format!("expected YYYYMMDD, got '{s}'")));
    }

    let year = digits::<i32>(s, 0..4).ok_or_else(invalid)?;
    let month = digits::<u32>(s, 4..6).ok_or_else(invalid)?;
    let day = digits::<u32>(s, 6..8).ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid().with_context(format!("no such date '{s}'")))
}

/// Parses a TIME value (RFC 5545 §3.3.12), returning the time and whether
/// it carried the UTC designator.
///
/// A leap second (`60`) is clamped to `59`.
fn parse_time(s: &str, line: usize, col: usize) -> ParseResult<(NaiveTime, bool)> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidTime, line, col);

    let (time_str, is_utc) = match s.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (s, false),
    };

    if time_str.len() != 6 {
        return Err(invalid());
    }

    let hour = digits::<u32>(time_str, 0..2).ok_or_else(invalid)?;
    let minute = digits::<u32>(time_str, 2..4).ok_or_else(invalid)?;
    let second = digits::<u32>(time_str, 4..6).ok_or_else(invalid)?;

    if second > 60 {
        return Err(invalid());
    }

    let time = NaiveTime::from_hms_opt(hour, minute, second.min(59)).ok_or_else(invalid)?;
    Ok((time, is_utc))
}

/// Parses a DATE-TIME value (RFC 5545 §3.3.5).
///
/// Format: YYYYMMDD"T"HHMMSS[Z] (e.g., "19970714T133000Z"). The TZID
/// parameter of the owning property decides between zoned and floating;
/// a `Z` suffix always wins.
///
/// ## Errors
/// Returns an error if the string is not a valid datetime format.
pub fn parse_datetime(
    s: &str,
    tzid: Option<&str>,
    line: usize,
    col: usize,
) -> ParseResult<DateTime> {
    let (date_str, time_str) = s.split_once('T').ok_or_else(|| {
        ParseError::new(ParseErrorKind::InvalidDateTime, line, col)
            .with_context(format!("expected YYYYMMDDTHHMMSS, got '{s}'"))
    })?;

    let date = parse_date(date_str, line, col)?;
    let (time, is_utc) = parse_time(time_str, line, col + date_str.len() + 1)?;

    let form = match (is_utc, tzid) {
        (true, _) => DateTimeForm::Utc,
        (false, Some(tz)) => DateTimeForm::Zoned {
            tzid: tz.to_string(),
        },
        (false, None) => DateTimeForm::Floating,
    };

    Ok(DateTime {
        local: date.and_time(time),
        form,
    })
}

/// Unescapes a TEXT value (RFC 5545 §3.3.11).
///
/// Invalid escapes are kept verbatim.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => result.push('\n'),
            Some(',') => result.push(','),
            Some(';') => result.push(';'),
            Some('\\') | None => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
        }
    }

    result
}
