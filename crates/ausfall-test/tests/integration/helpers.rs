#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! A [`TestSite`] is a scratch directory laid out like the website checkout
//! the tool runs in, with settings pointing at its files.

use std::path::Path;

use ausfall_test::component::config::{LoggingConfig, MarkerConfig, PathsConfig, Settings};
use ausfall_test::component::constants::DEFAULT_TIMEZONE;
use chrono::NaiveDate;
use tempfile::TempDir;

pub const BEGIN: &str = "<!-- BEGIN GENERATED: cancelled-dates -->";
pub const END: &str = "<!-- END GENERATED: cancelled-dates -->";

/// A skip page with a stale generated block.
pub fn skip_page(inner: &str) -> String {
    format!(
        "---\ntitle: Ausfälle\n---\n\nAn diesen Tagen fällt der Spieleabend aus:\n\n{BEGIN}{inner}{END}\n\nBis bald!\n"
    )
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub struct TestSite {
    dir: TempDir,
    pub settings: Settings,
}

impl TestSite {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        let settings = Settings {
            paths: PathsConfig {
                calendar: root.join("static/Mittenwalde-spielt.ics"),
                document: root.join("content/de/homepage/skip.md"),
                labels: root.join("data/skip_labels.yml"),
            },
            timezone: DEFAULT_TIMEZONE.to_string(),
            markers: MarkerConfig::default(),
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        };
        Self { dir, settings }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_calendar(&self, contents: impl AsRef<[u8]>) -> &Self {
        write(&self.settings.paths.calendar, contents.as_ref());
        self
    }

    pub fn write_document(&self, contents: &str) -> &Self {
        write(&self.settings.paths.document, contents.as_bytes());
        self
    }

    pub fn write_labels(&self, contents: &str) -> &Self {
        write(&self.settings.paths.labels, contents.as_bytes());
        self
    }

    pub fn read_document(&self) -> String {
        std::fs::read_to_string(&self.settings.paths.document).expect("Failed to read document")
    }
}

fn write(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(path, contents).expect("Failed to write test file");
}

/// Builds a VCALENDAR from raw VEVENT bodies, CRLF-terminated.
#[derive(Default)]
pub struct CalendarBuilder {
    events: Vec<Vec<String>>,
}

impl CalendarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a VEVENT with the given property lines.
    #[must_use]
    pub fn event(mut self, lines: &[&str]) -> Self {
        self.events
            .push(lines.iter().map(|line| (*line).to_string()).collect());
        self
    }

    pub fn build(&self) -> String {
        let mut out = String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Mittenwalde spielt//DE\r\n");
        for event in &self.events {
            out.push_str("BEGIN:VEVENT\r\n");
            for line in event {
                out.push_str(line);
                out.push_str("\r\n");
            }
            out.push_str("END:VEVENT\r\n");
        }
        out.push_str("END:VCALENDAR\r\n");
        out
    }
}
