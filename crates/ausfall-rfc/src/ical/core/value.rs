//! Parsed property values (RFC 5545 §3.3).

use chrono::NaiveDate;

use super::DateTime;

/// Value types understood by the reader.
///
/// Everything that is neither a date nor text (DURATION, PERIOD, RECUR,
/// INTEGER, URI, ...) is kept as [`Value::Unknown`] with its raw text, as is
/// a malformed value inside a VEVENT.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// DATE value.
    Date(NaiveDate),
    /// Comma-separated list of DATE values (EXDATE, RDATE).
    DateList(Vec<NaiveDate>),
    /// DATE-TIME value.
    DateTime(DateTime),
    /// Comma-separated list of DATE-TIME values (EXDATE, RDATE).
    DateTimeList(Vec<DateTime>),
    /// TEXT value (unescaped).
    Text(String),
    /// Unknown or unparsed value.
    Unknown(String),
}
