//! iCalendar parsing error types.

use std::fmt;

/// Result type for iCalendar parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for iCalendar parsing, located by line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Column number where the error occurred (1-based).
    pub column: usize,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}, column {}", self.kind, self.line, self.column)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Missing property name.
    MissingPropertyName,
    /// Invalid property name character.
    InvalidPropertyName,
    /// Missing colon separator.
    MissingColon,
    /// Invalid parameter format.
    InvalidParameter,
    /// Unclosed quoted string.
    UnclosedQuote,
    /// Invalid date format or a date that does not exist.
    InvalidDate,
    /// Invalid time format.
    InvalidTime,
    /// Invalid date-time format.
    InvalidDateTime,
    /// Missing BEGIN line.
    MissingBegin,
    /// Missing END line.
    MissingEnd,
    /// Mismatched BEGIN/END.
    MismatchedComponent,
    /// Components nested deeper than the reader allows.
    NestingTooDeep,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MissingPropertyName => "missing property name",
            Self::InvalidPropertyName => "invalid property name",
            Self::MissingColon => "missing colon separator",
            Self::InvalidParameter => "invalid parameter format",
            Self::UnclosedQuote => "unclosed quoted string",
            Self::InvalidDate => "invalid date format",
            Self::InvalidTime => "invalid time format",
            Self::InvalidDateTime => "invalid date-time format",
            Self::MissingBegin => "missing BEGIN line",
            Self::MissingEnd => "missing END line",
            Self::MismatchedComponent => "mismatched BEGIN/END",
            Self::NestingTooDeep => "components nested too deeply",
        };
        f.write_str(msg)
    }
}
