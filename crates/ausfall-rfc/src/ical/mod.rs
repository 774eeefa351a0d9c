//! iCalendar RFC 5545 reader.
//!
//! - `core`: Type definitions for iCalendar structures
//! - `parse`: Parsers for iCalendar content
//! - `timezone`: TZID resolution and conversion between zones
//!
//! ## Example
//!
//! ```rust
//! use ausfall_rfc::ical::parse;
//!
//! let input = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\nUID:a\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
//! let ical = parse::parse(input).unwrap();
//! assert_eq!(ical.walk().len(), 2);
//! ```

pub mod core;
pub mod parse;
pub mod timezone;

pub use self::core::{Component, ComponentKind, ICalendar, Parameter, Property};
pub use parse::{ParseError, ParseResult, parse, parse_bytes};
