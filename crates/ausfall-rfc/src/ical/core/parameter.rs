//! iCalendar property parameters (RFC 5545 §3.2).

/// A single iCalendar property parameter.
///
/// In `DTSTART;TZID=Europe/Berlin:20260123T120000` the parameter is named
/// `TZID` with the single value `Europe/Berlin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values, comma-separated in the source.
    pub values: Vec<String>,
}

impl Parameter {
    /// Creates a parameter; the name is uppercased.
    #[must_use]
    pub fn with_values(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Returns the first (and usually only) value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}
