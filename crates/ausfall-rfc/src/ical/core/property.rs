//! iCalendar property and content line types (RFC 5545 §3.1, §3.8).

use super::{Parameter, Value};

/// A raw content line as produced by the lexer, before value resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value string (after unfolding, before unescaping).
    pub raw_value: String,
}

impl ContentLine {
    /// Creates a content line with parameters.
    #[must_use]
    pub fn with_params(
        name: impl Into<String>,
        params: Vec<Parameter>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            raw_value: value.into(),
        }
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        let name_upper = name.to_ascii_uppercase();
        self.params
            .iter()
            .find(|p| p.name == name_upper)
            .and_then(Parameter::value)
    }

    /// Returns the VALUE parameter if present.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.get_param_value("VALUE")
    }

    /// Returns the TZID parameter if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value("TZID")
    }
}

/// A fully parsed iCalendar property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Parsed value.
    pub value: Value,
    /// Original raw value string.
    pub raw_value: String,
}

/// Property names read by the cancellation extractor.
pub mod names {
    pub const DTSTART: &str = "DTSTART";
    pub const EXDATE: &str = "EXDATE";
    pub const RECURRENCE_ID: &str = "RECURRENCE-ID";
    pub const STATUS: &str = "STATUS";
}
