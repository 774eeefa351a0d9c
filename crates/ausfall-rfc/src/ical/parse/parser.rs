//! iCalendar document parser (RFC 5545).
//!
//! Parses complete iCalendar documents into a component tree with typed
//! DATE / DATE-TIME values.

use std::iter::Peekable;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{parse_content_line, split_lines};
use super::values::{parse_date, parse_datetime, unescape_text};
use crate::error::RfcResult;
use crate::ical::core::{Component, ComponentKind, ContentLine, ICalendar, Property, Value};

/// Parses an iCalendar document from raw bytes.
///
/// The bytes must be UTF-8; a leading byte order mark is ignored.
///
/// ## Errors
///
/// Returns an error if the input is not UTF-8 or not valid iCalendar.
pub fn parse_bytes(input: Vec<u8>) -> RfcResult<ICalendar> {
    let text = String::from_utf8(input)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Ok(parse(text)?)
}

/// Parses an iCalendar document from a string.
///
/// ## Errors
///
/// Returns an error if the input is not valid iCalendar.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<ICalendar> {
    tracing::debug!("Parsing iCalendar document");

    let lines = split_lines(input);

    if lines.is_empty() {
        tracing::warn!("Empty iCalendar input");
        return Err(ParseError::new(ParseErrorKind::MissingBegin, 1, 1));
    }

    tracing::trace!(count = lines.len(), "Split lines");

    let content_lines: Vec<(usize, ContentLine)> = lines
        .into_iter()
        .map(|(line_num, line)| parse_content_line(&line, line_num).map(|cl| (line_num, cl)))
        .collect::<ParseResult<_>>()?;

    let mut iter = content_lines.into_iter().peekable();

    let (line_num, first) = iter
        .next()
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingBegin, 1, 1))?;
    if first.name != "BEGIN" {
        return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1));
    }

    let root = parse_component(&mut iter, line_num, &first.raw_value, 0)?;

    if root.kind != ComponentKind::Calendar {
        tracing::warn!(name = %root.name, "Root component is not VCALENDAR");
        return Err(
            ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
                .with_context("expected VCALENDAR"),
        );
    }

    if let Some((trailing, _)) = iter.peek() {
        tracing::warn!(line = trailing, "Ignoring content after END:VCALENDAR");
    }

    tracing::debug!(
        components = root.children.len(),
        "iCalendar document parsed successfully"
    );

    Ok(ICalendar { root })
}

/// Deepest component nesting accepted; real calendars use three levels.
const MAX_COMPONENT_DEPTH: usize = 32;

/// Parses the body of a component whose BEGIN line was already consumed.
///
/// `depth` is the number of enclosing components.
fn parse_component(
    iter: &mut Peekable<impl Iterator<Item = (usize, ContentLine)>>,
    begin_line_num: usize,
    name: &str,
    depth: usize,
) -> ParseResult<Component> {
    if depth >= MAX_COMPONENT_DEPTH {
        return Err(
            ParseError::new(ParseErrorKind::NestingTooDeep, begin_line_num, 1)
                .with_context(format!("BEGIN:{name} exceeds {MAX_COMPONENT_DEPTH} levels")),
        );
    }

    let mut component = Component::named(name);
    let mut last_line_num = begin_line_num;

    loop {
        let Some((line_num, content_line)) = iter.next() else {
            return Err(
                ParseError::new(ParseErrorKind::MissingEnd, last_line_num, 1)
                    .with_context(format!("missing END:{}", component.name)),
            );
        };
        last_line_num = line_num;

        match content_line.name.as_str() {
            "BEGIN" => {
                let nested = parse_component(iter, line_num, &content_line.raw_value, depth + 1)?;
                component.add_child(nested);
            }
            "END" => {
                let end_name = content_line.raw_value.to_ascii_uppercase();
                if end_name != component.name {
                    return Err(
                        ParseError::new(ParseErrorKind::MismatchedComponent, line_num, 1)
                            .with_context(format!(
                                "expected END:{}, got END:{end_name}",
                                component.name
                            )),
                    );
                }
                return Ok(component);
            }
            _ => {
                let tolerant = component.kind == ComponentKind::Event;
                component.add_property(parse_property(content_line, line_num, tolerant)?);
            }
        }
    }
}

/// Parses a property from a content line, resolving the value type.
///
/// With `tolerant` set, a malformed value is logged and kept as
/// [`Value::Unknown`] instead of failing the document.
fn parse_property(cl: ContentLine, line_num: usize, tolerant: bool) -> ParseResult<Property> {
    let value_type = determine_value_type(&cl);
    let value = match parse_value(&cl.raw_value, value_type, cl.tzid(), line_num) {
        Ok(value) => value,
        Err(e) if tolerant => {
            tracing::warn!(property = %cl.name, error = %e, "Keeping malformed value as unknown");
            Value::Unknown(cl.raw_value.clone())
        }
        Err(e) => return Err(e),
    };

    Ok(Property {
        name: cl.name,
        params: cl.params,
        value,
        raw_value: cl.raw_value,
    })
}

/// Internal enum for value type handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueType {
    Date,
    DateTime,
    Text,
    Unknown,
}

impl ValueType {
    fn from_param(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "DATE" => Self::Date,
            "DATE-TIME" => Self::DateTime,
            "TEXT" => Self::Text,
            _ => Self::Unknown,
        }
    }
}

/// Whether a raw value is a bare DATE (or a list of them).
fn looks_like_date(raw: &str) -> bool {
    raw.split(',').all(|part| part.trim().len() == 8 && !part.contains('T'))
}

/// Determines the value type for a property.
fn determine_value_type(cl: &ContentLine) -> ValueType {
    if let Some(value_type) = cl.value_type() {
        return ValueType::from_param(value_type);
    }

    match cl.name.as_str() {
        "DTSTART" | "DTEND" | "DTSTAMP" | "CREATED" | "LAST-MODIFIED" | "COMPLETED" | "DUE"
        | "RECURRENCE-ID" | "EXDATE" | "RDATE" => {
            // Some producers omit VALUE=DATE on all-day values.
            if looks_like_date(&cl.raw_value) {
                ValueType::Date
            } else if cl.raw_value.contains('/') {
                ValueType::Unknown
            } else {
                ValueType::DateTime
            }
        }

        "RRULE" | "EXRULE" | "DURATION" | "TRIGGER" | "FREEBUSY" | "TZOFFSETFROM"
        | "TZOFFSETTO" | "GEO" | "ATTACH" | "PERCENT-COMPLETE" | "PRIORITY" | "REPEAT"
        | "SEQUENCE" | "URL" | "TZURL" | "SOURCE" | "ATTENDEE" | "ORGANIZER" => {
            ValueType::Unknown
        }

        _ => ValueType::Text,
    }
}

/// Parses a raw value string into a typed Value.
fn parse_value(
    raw: &str,
    value_type: ValueType,
    tzid: Option<&str>,
    line_num: usize,
) -> ParseResult<Value> {
    match value_type {
        ValueType::Text => Ok(Value::Text(unescape_text(raw))),
        ValueType::DateTime if raw.contains(',') => {
            let dts = raw
                .split(',')
                .map(|s| parse_datetime(s.trim(), tzid, line_num, 1))
                .collect::<ParseResult<_>>()?;
            Ok(Value::DateTimeList(dts))
        }
        ValueType::DateTime => Ok(Value::DateTime(parse_datetime(raw, tzid, line_num, 1)?)),
        ValueType::Date if raw.contains(',') => {
            let dates = raw
                .split(',')
                .map(|s| parse_date(s.trim(), line_num, 1))
                .collect::<ParseResult<_>>()?;
            Ok(Value::DateList(dates))
        }
        ValueType::Date => Ok(Value::Date(parse_date(raw, line_num, 1)?)),
        ValueType::Unknown => Ok(Value::Unknown(raw.to_string())),
    }
}
