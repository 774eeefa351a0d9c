//! iCalendar DATE-TIME value type (RFC 5545 §3.3.5).

use chrono::NaiveDateTime;

/// Form of DATE-TIME value (RFC 5545 §3.3.5).
///
/// iCalendar DATE-TIME values come in three mutually exclusive forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateTimeForm {
    /// Floating time - same wall-clock time in any timezone.
    ///
    /// Example: `19980118T230000`
    Floating,

    /// UTC time - absolute instant, indicated by 'Z' suffix.
    ///
    /// Example: `19980119T070000Z`
    Utc,

    /// Zoned time - local time with TZID reference.
    ///
    /// Example: `TZID=America/New_York:19980119T020000`
    Zoned {
        /// The timezone identifier as written in the TZID parameter.
        tzid: String,
    },
}

/// DATE-TIME value (RFC 5545 §3.3.5).
///
/// The wall-clock reading is kept as written; `form` says how to anchor it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTime {
    /// Wall-clock date and time as written in the calendar.
    pub local: NaiveDateTime,
    /// The form of this DATE-TIME (floating, UTC, or zoned).
    pub form: DateTimeForm,
}
