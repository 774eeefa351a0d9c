//! Calendar files as they come out of real exporters: byte order marks,
//! bare LF line endings, folded lines and unusual TZIDs.

use ausfall_test::app::error::AppError;
use ausfall_test::app::pipeline::run;

use super::helpers::{TestSite, skip_page, ymd};

const FOLDED_LF: &str = "BEGIN:VCALENDAR\n\
VERSION:2.0\n\
BEGIN:VEVENT\n\
UID:spieleabend@mittenwalde.example\n\
SUMMARY:Spieleabend im Gemeindehaus mit sehr langer Beschreibung die umgebr\n \
ochen wurde\n\
DTSTART;TZID=Europe/Berlin:20250104T190000\n\
EXDATE;TZID=Europe/Berlin:20250301T190000,\n 20250308T190000\n\
END:VEVENT\n\
END:VCALENDAR\n";

/// ## Summary
/// Folded EXDATE lists with LF endings are read completely.
#[test_log::test]
fn folded_lines_with_lf_endings() {
    let site = TestSite::new();
    site.write_calendar(FOLDED_LF).write_document(&skip_page(""));

    run(&site.settings, ymd(2025, 1, 1)).expect("run succeeds");

    assert_eq!(site.read_document(), skip_page("\n- 01.03.2025\n- 08.03.2025\n"));
}

/// ## Summary
/// A UTF-8 byte order mark in front of the calendar is ignored.
#[test_log::test]
fn byte_order_mark_is_ignored() {
    let site = TestSite::new();
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(FOLDED_LF.as_bytes());
    site.write_calendar(bytes).write_document(&skip_page(""));

    run(&site.settings, ymd(2025, 3, 5)).expect("run succeeds");

    assert_eq!(site.read_document(), skip_page("\n- 08.03.2025\n"));
}

/// ## Summary
/// Windows and Mozilla style TZIDs resolve to the same zone.
#[test_log::test]
fn exporter_specific_tzids() {
    let site = TestSite::new();
    site.write_calendar(
        "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:a@example\r\n\
DTSTART;TZID=W. Europe Standard Time:20250104T233000\r\n\
EXDATE;TZID=W. Europe Standard Time:20250301T233000\r\n\
EXDATE;TZID=/mozilla.org/20070129_1/Europe/Berlin:20250308T233000\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n",
    )
    .write_document(&skip_page(""));

    run(&site.settings, ymd(2025, 1, 1)).expect("run succeeds");

    assert_eq!(site.read_document(), skip_page("\n- 01.03.2025\n- 08.03.2025\n"));
}

/// ## Summary
/// A calendar that is not valid UTF-8 fails the run without a write.
#[test_log::test]
fn invalid_utf8_is_fatal() {
    let site = TestSite::new();
    let original = skip_page("\nalt\n");
    site.write_calendar(b"BEGIN:VCALENDAR\r\nSUMMARY:\xff\xfe\r\nEND:VCALENDAR\r\n".as_slice())
        .write_document(&original);

    let err = run(&site.settings, ymd(2025, 1, 1)).expect_err("run fails");

    assert!(matches!(err, AppError::Calendar { .. }));
    assert_eq!(site.read_document(), original);
}

/// ## Summary
/// Truncated calendars are rejected.
#[test_log::test]
fn truncated_calendar_is_fatal() {
    let site = TestSite::new();
    site.write_calendar("BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nEXDATE;VALUE=DATE:20250301\r\n")
        .write_document(&skip_page(""));

    let err = run(&site.settings, ymd(2025, 1, 1)).expect_err("run fails");

    assert!(matches!(err, AppError::Calendar { .. }));
}
