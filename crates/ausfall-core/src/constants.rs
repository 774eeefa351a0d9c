/// Name of the generated block inside the target document.
pub const GENERATED_SECTION: &str = "cancelled-dates";

pub const DEFAULT_BEGIN_MARKER: &str =
    const_str::concat!("<!-- BEGIN GENERATED: ", GENERATED_SECTION, " -->");
pub const DEFAULT_END_MARKER: &str =
    const_str::concat!("<!-- END GENERATED: ", GENERATED_SECTION, " -->");

pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

pub const DEFAULT_CALENDAR_PATH: &str = "static/Mittenwalde-spielt.ics";
pub const DEFAULT_DOCUMENT_PATH: &str = "content/de/homepage/skip.md";
pub const DEFAULT_LABELS_PATH: &str = "data/skip_labels.yml";

/// Rendered instead of a list when no future cancellations exist.
pub const NO_CANCELLATIONS_MESSAGE: &str = "Aktuell sind keine Ausfalltermine geplant! 🥳";
