//! Calendar loading.
//!
//! Flattens a parsed iCalendar tree into [`CalendarEvent`] records that carry
//! exactly the fields the cancellation extractor reads, each one typed as
//! present-or-absent.

use std::path::Path;

use ausfall_rfc::ical::core::{DateTimeForm, Value, names};
use ausfall_rfc::ical::{Component, ICalendar, parse_bytes};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{AppError, AppResult};

/// A DATE or DATE-TIME value read from the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalendarTimestamp {
    /// All-day value, independent of any timezone.
    Date(NaiveDate),
    /// Wall-clock time without timezone information.
    Floating(NaiveDateTime),
    /// Absolute instant.
    Utc(DateTime<Utc>),
    /// Wall-clock time in the zone named by `tzid`.
    Zoned { local: NaiveDateTime, tzid: String },
    /// A value of any other shape (PERIOD, text, ...).
    Unsupported,
}

impl CalendarTimestamp {
    /// Converts a single property value.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Date(date) => Self::Date(*date),
            Value::DateTime(dt) => match &dt.form {
                DateTimeForm::Floating => Self::Floating(dt.local),
                DateTimeForm::Utc => Self::Utc(dt.local.and_utc()),
                DateTimeForm::Zoned { tzid } => Self::Zoned {
                    local: dt.local,
                    tzid: tzid.clone(),
                },
            },
            _ => Self::Unsupported,
        }
    }

    /// Converts a value that may hold a comma-separated list.
    #[must_use]
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        match value {
            Value::DateList(dates) => dates.iter().copied().map(Self::Date).collect(),
            Value::DateTimeList(dts) => dts
                .iter()
                .cloned()
                .map(|dt| Self::from_value(&Value::DateTime(dt)))
                .collect(),
            other => vec![Self::from_value(other)],
        }
    }
}

/// Timestamps of one EXDATE property.
pub type ExdateList = Vec<CalendarTimestamp>;

/// One component of the calendar, reduced to the fields that matter here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalendarEvent {
    /// Component name, e.g. `VEVENT`.
    pub kind: String,
    pub status: Option<String>,
    pub start: Option<CalendarTimestamp>,
    pub recurrence_id: Option<CalendarTimestamp>,
    /// One entry per EXDATE property, in source order.
    pub exdates: Vec<ExdateList>,
}

impl CalendarEvent {
    /// Builds a record from a parsed component.
    #[must_use]
    pub fn from_component(component: &Component) -> Self {
        let timestamp = |name: &str| {
            component
                .get_property(name)
                .map(|prop| CalendarTimestamp::from_value(&prop.value))
        };

        Self {
            kind: component.name.clone(),
            status: component
                .get_property(names::STATUS)
                .map(|prop| prop.raw_value.trim().to_string()),
            start: timestamp(names::DTSTART),
            recurrence_id: timestamp(names::RECURRENCE_ID),
            exdates: component
                .get_properties(names::EXDATE)
                .into_iter()
                .map(|prop| CalendarTimestamp::list_from_value(&prop.value))
                .collect(),
        }
    }
}

/// Flattens every component of the calendar, nested ones included.
#[must_use]
pub fn events_from_calendar(ical: &ICalendar) -> Vec<CalendarEvent> {
    ical.walk()
        .into_iter()
        .map(CalendarEvent::from_component)
        .collect()
}

/// ## Summary
/// Reads and parses the calendar file.
///
/// ## Errors
/// Returns an error if the file cannot be read or is not valid iCalendar.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_calendar(path: &Path) -> AppResult<Vec<CalendarEvent>> {
    let bytes = std::fs::read(path).map_err(|e| AppError::io("read", path, e))?;

    let ical = parse_bytes(bytes).map_err(|source| AppError::Calendar {
        path: path.to_path_buf(),
        source,
    })?;

    let events = events_from_calendar(&ical);
    tracing::debug!(count = events.len(), "Loaded calendar components");

    Ok(events)
}
