use ausfall_test::app::error::AppError;
use ausfall_test::app::patch::{MarkerError, PatchOutcome};
use ausfall_test::app::pipeline::run;
use ausfall_test::component::config::MarkerConfig;

use super::helpers::{BEGIN, CalendarBuilder, END, TestSite, skip_page, ymd};

fn weekly_series(exdate: &str) -> CalendarBuilder {
    CalendarBuilder::new().event(&[
        "UID:spieleabend@mittenwalde.example",
        "DTSTART;TZID=Europe/Berlin:20250104T190000",
        "RRULE:FREQ=WEEKLY;BYDAY=SA",
        exdate,
    ])
}

/// ## Summary
/// A single cancelled override renders as one line.
#[test_log::test]
fn cancelled_override_is_listed() {
    let site = TestSite::new();
    site.write_calendar(
        CalendarBuilder::new()
            .event(&[
                "UID:sommer@mittenwalde.example",
                "DTSTART;VALUE=DATE:20250603",
                "RRULE:FREQ=WEEKLY",
            ])
            .event(&[
                "UID:sommer@mittenwalde.example",
                "RECURRENCE-ID;VALUE=DATE:20250610",
                "DTSTART;VALUE=DATE:20250610",
                "STATUS:CANCELLED",
            ])
            .build(),
    )
    .write_document(&skip_page("\nalt\n"));

    let report = run(&site.settings, ymd(2025, 6, 1)).expect("run succeeds");

    assert_eq!(report.outcome, PatchOutcome::Written);
    assert_eq!(site.read_document(), skip_page("\n- 10.06.2025\n"));
}

/// ## Summary
/// EXDATEs are listed in order, with labels where the label file has one.
#[test_log::test]
fn exdates_with_labels() {
    let site = TestSite::new();
    site.write_calendar(
        weekly_series("EXDATE;TZID=Europe/Berlin:20250308T190000,20250301T190000").build(),
    )
    .write_document(&skip_page(""))
    .write_labels("2025-03-01: Ferien\n");

    run(&site.settings, ymd(2025, 2, 1)).expect("run succeeds");

    assert_eq!(
        site.read_document(),
        skip_page("\n- 01.03.2025 (Ferien)\n- 08.03.2025\n")
    );
}

/// ## Summary
/// Floating EXDATEs without a TZID are read as Berlin wall-clock times.
#[test_log::test]
fn floating_exdates_with_labels() {
    let site = TestSite::new();
    site.write_calendar(weekly_series("EXDATE:20250301T190000,20250308T190000").build())
        .write_document(&skip_page(""))
        .write_labels("2025-03-01: Ferien\n");

    let report = run(&site.settings, ymd(2025, 2, 1)).expect("run succeeds");

    assert_eq!(report.cancelled_total, 2);
    assert_eq!(
        site.read_document(),
        skip_page("\n- 01.03.2025 (Ferien)\n- 08.03.2025\n")
    );
}

/// ## Summary
/// A malformed timestamp elsewhere in the event does not hide its EXDATEs.
#[test_log::test]
fn malformed_dtstamp_keeps_exdates() {
    let site = TestSite::new();
    site.write_calendar(
        CalendarBuilder::new()
            .event(&[
                "UID:spieleabend@mittenwalde.example",
                "DTSTAMP:20250101T120000.000Z",
                "DTSTART;TZID=Europe/Berlin:20250104T190000",
                "RRULE:FREQ=WEEKLY;BYDAY=SA",
                "EXDATE;TZID=Europe/Berlin:20250301T190000",
            ])
            .build(),
    )
    .write_document(&skip_page(""));

    run(&site.settings, ymd(2025, 2, 1)).expect("run succeeds");

    assert_eq!(site.read_document(), skip_page("\n- 01.03.2025\n"));
}

/// ## Summary
/// Only past cancellations yield the placeholder sentence.
#[test_log::test]
fn past_cancellations_render_placeholder() {
    let site = TestSite::new();
    site.write_calendar(weekly_series("EXDATE;TZID=Europe/Berlin:20250301T190000").build())
        .write_document(&skip_page("\n- 01.03.2025\n"));

    let report = run(&site.settings, ymd(2025, 3, 2)).expect("run succeeds");

    assert_eq!(report.cancelled_total, 1);
    assert!(report.entries.is_empty());
    assert_eq!(
        site.read_document(),
        skip_page("\nAktuell sind keine Ausfalltermine geplant! 🥳\n")
    );
}

/// ## Summary
/// A document without an end marker fails the run and stays as it was.
#[test_log::test]
fn missing_end_marker_is_fatal() {
    let site = TestSite::new();
    let original = format!("Vorspann\n{BEGIN}\nalt\n");
    site.write_calendar(weekly_series("EXDATE;TZID=Europe/Berlin:20250301T190000").build())
        .write_document(&original);

    let err = run(&site.settings, ymd(2025, 1, 1)).expect_err("run fails");

    assert!(matches!(err, AppError::Markers(MarkerError::MissingEnd(_))));
    assert_eq!(site.read_document(), original);
}

/// ## Summary
/// The same date signalled by an EXDATE and a cancelled override is listed
/// once.
#[test_log::test]
fn duplicate_signals_are_listed_once() {
    let site = TestSite::new();
    site.write_calendar(
        weekly_series("EXDATE:20250301T180000Z")
            .event(&[
                "UID:spieleabend@mittenwalde.example",
                "RECURRENCE-ID;TZID=Europe/Berlin:20250301T190000",
                "DTSTART;TZID=Europe/Berlin:20250301T190000",
                "STATUS:CANCELLED",
            ])
            .build(),
    )
    .write_document(&skip_page(""));

    let report = run(&site.settings, ymd(2025, 1, 1)).expect("run succeeds");

    assert_eq!(report.cancelled_total, 1);
    assert_eq!(site.read_document(), skip_page("\n- 01.03.2025\n"));
}

/// ## Summary
/// A UTC exception late in the evening belongs to the next Berlin day.
#[test_log::test]
fn utc_exdate_is_normalized_to_berlin() {
    let site = TestSite::new();
    site.write_calendar(weekly_series("EXDATE:20250607T230000Z").build())
        .write_document(&skip_page(""));

    run(&site.settings, ymd(2025, 1, 1)).expect("run succeeds");

    assert_eq!(site.read_document(), skip_page("\n- 08.06.2025\n"));
}

/// ## Summary
/// Running twice leaves the document as the first run wrote it.
#[test_log::test]
fn rerun_is_idempotent() {
    let site = TestSite::new();
    site.write_calendar(weekly_series("EXDATE;VALUE=DATE:20250412,20250419").build())
        .write_document(&skip_page("\nalt\n"))
        .write_labels("2025-04-19: Ostern\n");

    let first = run(&site.settings, ymd(2025, 4, 1)).expect("first run succeeds");
    let after_first = site.read_document();
    let second = run(&site.settings, ymd(2025, 4, 1)).expect("second run succeeds");

    assert_eq!(first.outcome, PatchOutcome::Written);
    assert_eq!(second.outcome, PatchOutcome::Unchanged);
    assert_eq!(site.read_document(), after_first);
    assert_eq!(after_first, skip_page("\n- 12.04.2025\n- 19.04.2025 (Ostern)\n"));
}

/// ## Summary
/// Text outside the markers survives byte for byte, CRLF included.
#[test_log::test]
fn text_outside_markers_is_preserved() {
    let site = TestSite::new();
    let before = "# Ausfälle\r\n\r\n";
    let after = "\r\n\r\n_Stand: automatisch_\r\n";
    site.write_calendar(weekly_series("EXDATE;VALUE=DATE:20250412").build())
        .write_document(&format!("{before}{BEGIN}\r\nalt\r\n{END}{after}"));

    run(&site.settings, ymd(2025, 4, 1)).expect("run succeeds");

    assert_eq!(
        site.read_document(),
        format!("{before}{BEGIN}\n- 12.04.2025\n{END}{after}")
    );
}

/// ## Summary
/// Custom markers from the configuration are honoured.
#[test_log::test]
fn custom_markers() {
    let mut site = TestSite::new();
    site.settings.markers = MarkerConfig {
        begin: "<!-- ausfall:start -->".to_string(),
        end: "<!-- ausfall:end -->".to_string(),
    };
    site.write_calendar(weekly_series("EXDATE;VALUE=DATE:20250412").build())
        .write_document("<!-- ausfall:start -->\n<!-- ausfall:end -->\n");

    run(&site.settings, ymd(2025, 4, 1)).expect("run succeeds");

    assert_eq!(
        site.read_document(),
        "<!-- ausfall:start -->\n- 12.04.2025\n<!-- ausfall:end -->\n"
    );
}

/// ## Summary
/// A label file that is not a mapping aborts before the document is touched.
#[test_log::test]
fn malformed_label_file_is_fatal() {
    let site = TestSite::new();
    let original = skip_page("\nalt\n");
    site.write_calendar(weekly_series("EXDATE;VALUE=DATE:20250412").build())
        .write_document(&original)
        .write_labels("- Ferien\n- Ostern\n");

    let err = run(&site.settings, ymd(2025, 4, 1)).expect_err("run fails");

    assert!(matches!(err, AppError::LabelShape { .. }));
    assert_eq!(site.read_document(), original);
    assert!(site.root().join("data/skip_labels.yml").exists());
}
