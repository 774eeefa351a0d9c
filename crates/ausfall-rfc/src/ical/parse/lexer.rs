//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Handles line unfolding and tokenization of content lines.

use std::iter::Peekable;
use std::str::CharIndices;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::ical::core::{ContentLine, Parameter};

/// Splits input into logical content lines, merging folded continuations.
///
/// Accepts CRLF and bare LF line endings. A line starting with SP or HTAB
/// continues the previous line with that single whitespace character removed.
/// A line without any colon is also treated as a continuation, which keeps
/// feeds that fold without the leading whitespace readable. Returned line
/// numbers are 1-based and point at the first physical line.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (i, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let continuation = if let Some(rest) = line.strip_prefix([' ', '\t']) {
            Some(rest)
        } else if line.contains(':') {
            None
        } else {
            Some(line)
        };

        match (continuation, lines.last_mut()) {
            (Some(rest), Some((_, prev))) => prev.push_str(rest),
            (Some(rest), None) => lines.push((i + 1, rest.to_string())),
            (None, _) => lines.push((i + 1, line.to_string())),
        }
    }

    lines
}

/// Parses a single content line.
///
/// Format: `name *(";" param) ":" value`
///
/// ## Errors
/// Returns an error if the line is malformed or contains invalid characters.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let mut chars = line.char_indices().peekable();
    let mut name_end = None;
    let mut colon_pos = None;

    while let Some(&(i, c)) = chars.peek() {
        if c == ';' || c == ':' {
            name_end = Some(i);
            if c == ':' {
                colon_pos = Some(i);
            }
            chars.next();
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(
                ParseErrorKind::InvalidPropertyName,
                line_num,
                i + 1,
            ));
        }
        chars.next();
    }

    let name_end = match name_end {
        Some(0) => {
            return Err(ParseError::new(
                ParseErrorKind::MissingPropertyName,
                line_num,
                1,
            ));
        }
        Some(end) => end,
        None => {
            return Err(ParseError::new(
                ParseErrorKind::MissingColon,
                line_num,
                line.len(),
            ));
        }
    };

    let mut params = Vec::new();
    while colon_pos.is_none() {
        let (param, colon) = parse_parameter(&mut chars, line, line_num)?;
        params.push(param);
        colon_pos = colon;
    }

    let value_start = colon_pos.map_or(line.len(), |pos| pos + 1);

    Ok(ContentLine::with_params(
        &line[..name_end],
        params,
        &line[value_start..],
    ))
}

/// Parses one `NAME=value[,value]` parameter.
///
/// Consumes the trailing `;` or `:` and returns the colon's byte offset when
/// the parameter list ended.
fn parse_parameter(
    chars: &mut Peekable<CharIndices<'_>>,
    line: &str,
    line_num: usize,
) -> ParseResult<(Parameter, Option<usize>)> {
    let start = chars.peek().map_or(line.len(), |&(i, _)| i);

    let mut name_end = None;
    while let Some(&(i, c)) = chars.peek() {
        chars.next();
        if c == '=' {
            name_end = Some(i);
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                i + 1,
            ));
        }
    }

    let Some(name_end) = name_end.filter(|&end| end > start) else {
        return Err(ParseError::new(
            ParseErrorKind::InvalidParameter,
            line_num,
            start + 1,
        ));
    };

    let param_name = &line[start..name_end];

    let mut values = Vec::new();
    loop {
        values.push(parse_param_value(chars, line, line_num)?);

        match chars.next() {
            Some((_, ',')) => {}
            Some((_, ';')) => return Ok((Parameter::with_values(param_name, values), None)),
            Some((i, ':')) => return Ok((Parameter::with_values(param_name, values), Some(i))),
            Some((i, c)) => {
                return Err(
                    ParseError::new(ParseErrorKind::InvalidParameter, line_num, i + 1)
                        .with_context(format!("unexpected character '{c}'")),
                );
            }
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::MissingColon,
                    line_num,
                    line.len(),
                ));
            }
        }
    }
}

/// Parses a parameter value, quoted or not.
///
/// Quoted values honour RFC 6868 caret escapes (`^^`, `^n`, `^'`).
fn parse_param_value(
    chars: &mut Peekable<CharIndices<'_>>,
    line: &str,
    line_num: usize,
) -> ParseResult<String> {
    let Some(&(start, first)) = chars.peek() else {
        return Err(ParseError::new(
            ParseErrorKind::InvalidParameter,
            line_num,
            line.len(),
        ));
    };

    if first != '"' {
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if matches!(c, ',' | ';' | ':') {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        return Ok(line[start..end].to_string());
    }

    chars.next();
    let mut value = String::new();
    while let Some((_, c)) = chars.next() {
        match c {
            '"' => return Ok(value),
            '^' => match chars.peek().map(|&(_, next)| next) {
                Some('^') => {
                    value.push('^');
                    chars.next();
                }
                Some('n') => {
                    value.push('\n');
                    chars.next();
                }
                Some('\'') => {
                    value.push('"');
                    chars.next();
                }
                _ => value.push('^'),
            },
            other => value.push(other),
        }
    }

    Err(ParseError::new(
        ParseErrorKind::UnclosedQuote,
        line_num,
        start + 1,
    ))
}
