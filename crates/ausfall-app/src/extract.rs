//! Cancellation extraction.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::calendar::CalendarEvent;
use crate::normalize::DateNormalizer;

const EVENT_KIND: &str = "VEVENT";
const CANCELLED_STATUS: &str = "CANCELLED";

/// ## Summary
/// Collects every cancelled occurrence date from the calendar records.
///
/// Only `VEVENT` records contribute. An occurrence counts as cancelled when
/// it is listed in an `EXDATE` of its series, or when an override record
/// carries `STATUS:CANCELLED`; the latter contributes its recurrence-id, or
/// its start when the recurrence-id is absent or unusable.
///
/// Timestamps that cannot be normalized are skipped.
#[tracing::instrument(skip_all, fields(events = events.len()))]
pub fn extract_cancelled_dates(
    events: &[CalendarEvent],
    normalizer: &mut DateNormalizer,
) -> HashSet<NaiveDate> {
    let mut cancelled = HashSet::new();

    for event in events
        .iter()
        .filter(|event| event.kind.eq_ignore_ascii_case(EVENT_KIND))
    {
        cancelled.extend(
            event
                .exdates
                .iter()
                .flatten()
                .filter_map(|timestamp| normalizer.to_reference_date(Some(timestamp))),
        );

        if is_cancelled(event)
            && let Some(date) = normalizer
                .to_reference_date(event.recurrence_id.as_ref())
                .or_else(|| normalizer.to_reference_date(event.start.as_ref()))
        {
            cancelled.insert(date);
        }
    }

    tracing::debug!(count = cancelled.len(), "Extracted cancelled dates");
    cancelled
}

fn is_cancelled(event: &CalendarEvent) -> bool {
    event
        .status
        .as_deref()
        .is_some_and(|status| status.eq_ignore_ascii_case(CANCELLED_STATUS))
}
