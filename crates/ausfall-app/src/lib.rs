//! Generates the list of cancelled event dates for the website's skip page.
//!
//! The pipeline is strictly sequential: load the calendar, extract cancelled
//! dates, load labels, render the fragment and patch it into the document.

pub mod calendar;
pub mod error;
pub mod extract;
pub mod labels;
pub mod normalize;
pub mod patch;
pub mod pipeline;
pub mod render;
