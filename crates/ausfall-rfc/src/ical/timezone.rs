//! Timezone resolution for iCalendar TZID parameters.
//!
//! Uses ICU4X to map Windows timezone names and IANA aliases onto canonical
//! IANA identifiers, then `chrono-tz` for the actual offset rules.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

use crate::error::{RfcError, RfcResult};

/// Resolver for timezone identifiers with a per-run cache.
#[derive(Debug, Default)]
pub struct TimeZoneResolver {
    cache: HashMap<String, Tz>,
}

impl TimeZoneResolver {
    /// Creates a new timezone resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Resolves a TZID to a `chrono_tz::Tz`.
    ///
    /// Windows names (`W. Europe Standard Time`), vendor prefixes
    /// (`/mozilla.org/...`) and IANA aliases are normalized first.
    ///
    /// ## Errors
    ///
    /// Returns `RfcError::UnknownTimezone` if the TZID cannot be resolved.
    pub fn resolve(&mut self, tzid: &str) -> RfcResult<Tz> {
        if let Some(tz) = self.cache.get(tzid) {
            return Ok(*tz);
        }

        let normalized = normalize_tzid(tzid);
        let tz = Tz::from_str(&normalized)
            .map_err(|_e| RfcError::UnknownTimezone(tzid.to_string()))?;

        tracing::trace!(tzid, resolved = %tz, "Resolved timezone");
        self.cache.insert(tzid.to_string(), tz);

        Ok(tz)
    }
}

/// Normalizes common calendar-client timezone identifiers to IANA names.
fn normalize_tzid(tzid: &str) -> String {
    let stripped = match tzid
        .strip_prefix("/mozilla.org/")
        .or_else(|| tzid.strip_prefix("/softwarestudio.org/"))
    {
        // Vendor prefixes may carry a version segment: /mozilla.org/20070129_1/Europe/Berlin
        Some(rest) => rest
            .split_once('/')
            .filter(|(version, _)| version.bytes().any(|b| b.is_ascii_digit()))
            .map_or(rest, |(_, name)| name),
        None => tzid,
    }
    .trim_matches('"');

    let iana_parser = IanaParserExtended::new();

    let windows_parser = WindowsParser::new();
    if let Some(tz) = windows_parser.parse(stripped, None) {
        for entry in iana_parser.iter() {
            if entry.time_zone == tz {
                return entry.canonical.to_string();
            }
        }
    }

    // Canonicalizes aliases such as Europe/Kiev -> Europe/Kyiv.
    let parsed = iana_parser.parse(stripped);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    stripped.to_string()
}

/// ## Summary
/// Anchors a wall-clock time in `tz` and returns the instant in UTC.
///
/// A time inside a DST fold resolves to its first occurrence. A time inside
/// a DST gap is shifted forward by one hour, the way calendar clients
/// display such occurrences.
#[must_use]
pub fn local_to_utc(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => {
            let shifted = local + Duration::hours(1);
            tz.from_local_datetime(&shifted)
                .earliest()
                .map_or_else(|| local.and_utc(), |dt| dt.with_timezone(&Utc))
        }
    }
}
