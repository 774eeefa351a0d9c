//! iCalendar (RFC 5545) reading support for the cancelled-dates generator.
//!
//! Only the subset needed to read recurring-event calendars is modelled:
//! component trees, properties with parameters, and DATE / DATE-TIME values.
//! Everything else is preserved as raw text.

pub mod error;
pub mod ical;
