//! iCalendar core models (RFC 5545).
//!
//! Properties keep their raw value next to the parsed one, and unknown
//! components and properties are preserved, so nothing in a calendar is
//! silently dropped while reading.

mod component;
mod datetime;
mod parameter;
mod property;
mod value;

pub use component::{Component, ComponentKind, ICalendar};
pub use datetime::{DateTime, DateTimeForm};
pub use parameter::Parameter;
pub use property::{ContentLine, Property, names};
pub use value::Value;
