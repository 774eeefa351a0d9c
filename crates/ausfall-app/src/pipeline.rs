//! The end-to-end run: calendar in, patched document out.

use ausfall_core::config::Settings;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::calendar::load_calendar;
use crate::error::AppResult;
use crate::extract::extract_cancelled_dates;
use crate::labels::load_labels;
use crate::normalize::DateNormalizer;
use crate::patch::{PatchOutcome, patch_document};
use crate::render::{CancelledDateEntry, build_entries, render_fragment};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Distinct cancelled dates found in the calendar, past ones included.
    pub cancelled_total: usize,
    /// The upcoming entries written to the document.
    pub entries: Vec<CancelledDateEntry>,
    pub outcome: PatchOutcome,
}

/// Current date in `tz`.
#[must_use]
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// ## Summary
/// Runs the whole pipeline once with `today` as the cut-off date.
///
/// The document is only written after every input has been read and the
/// patched text has been built.
///
/// ## Errors
/// Returns an error if the calendar or label file is unusable, the reference
/// timezone is invalid, the document markers are broken, or any file I/O
/// fails.
#[tracing::instrument(skip(settings), fields(calendar = %settings.paths.calendar.display()))]
pub fn run(settings: &Settings, today: NaiveDate) -> AppResult<RunReport> {
    let reference = settings.reference_timezone()?;

    let events = load_calendar(&settings.paths.calendar)?;
    let mut normalizer = DateNormalizer::new(reference);
    let cancelled = extract_cancelled_dates(&events, &mut normalizer);

    let labels = load_labels(&settings.paths.labels)?;
    let entries = build_entries(&cancelled, today, &labels);
    tracing::info!(
        total = cancelled.len(),
        upcoming = entries.len(),
        "Collected cancelled dates"
    );

    let fragment = render_fragment(&entries);
    let outcome = patch_document(&settings.paths.document, &fragment, &settings.markers)?;

    Ok(RunReport {
        cancelled_total: cancelled.len(),
        entries,
        outcome,
    })
}
