//! Date normalization into the reference timezone.

use std::collections::HashSet;

use ausfall_rfc::ical::timezone::{TimeZoneResolver, local_to_utc};
use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::calendar::CalendarTimestamp;

/// Maps calendar timestamps onto local dates in one reference timezone.
///
/// Holds a TZID cache; results depend only on the timestamp and the
/// reference timezone.
#[derive(Debug)]
pub struct DateNormalizer {
    reference: Tz,
    resolver: TimeZoneResolver,
    unknown_tzids: HashSet<String>,
}

impl DateNormalizer {
    #[must_use]
    pub fn new(reference: Tz) -> Self {
        Self {
            reference,
            resolver: TimeZoneResolver::new(),
            unknown_tzids: HashSet::new(),
        }
    }

    #[must_use]
    pub const fn reference(&self) -> Tz {
        self.reference
    }

    /// ## Summary
    /// Returns the local date of `timestamp` in the reference timezone.
    ///
    /// - DATE values are returned unchanged.
    /// - Floating values are taken as reference-zone wall-clock time.
    /// - UTC and zoned values are converted, then truncated to their date.
    /// - Absent or unsupported values yield `None`.
    ///
    /// A TZID that cannot be resolved is read as floating time.
    pub fn to_reference_date(&mut self, timestamp: Option<&CalendarTimestamp>) -> Option<NaiveDate> {
        match timestamp? {
            CalendarTimestamp::Date(date) => Some(*date),
            CalendarTimestamp::Floating(local) => Some(local.date()),
            CalendarTimestamp::Utc(instant) => {
                Some(instant.with_timezone(&self.reference).date_naive())
            }
            CalendarTimestamp::Zoned { local, tzid } => match self.resolver.resolve(tzid) {
                Ok(tz) => Some(
                    local_to_utc(*local, tz)
                        .with_timezone(&self.reference)
                        .date_naive(),
                ),
                Err(e) => {
                    if self.unknown_tzids.insert(tzid.clone()) {
                        tracing::warn!(error = %e, "Treating unresolvable TZID as floating time");
                    }
                    Some(local.date())
                }
            },
            CalendarTimestamp::Unsupported => None,
        }
    }
}
