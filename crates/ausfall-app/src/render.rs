//! Entry selection and fragment rendering.

use std::collections::HashSet;

use ausfall_core::constants::NO_CANCELLATIONS_MESSAGE;
use chrono::NaiveDate;

use crate::labels::LabelTable;

/// One line of the generated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelledDateEntry {
    pub cancelled_date: NaiveDate,
    pub label: Option<String>,
}

/// ## Summary
/// Keeps the dates on or after `today`, sorts them ascending and attaches
/// their labels.
#[must_use]
pub fn build_entries(
    dates: &HashSet<NaiveDate>,
    today: NaiveDate,
    labels: &LabelTable,
) -> Vec<CancelledDateEntry> {
    let mut upcoming: Vec<NaiveDate> =
        dates.iter().copied().filter(|date| *date >= today).collect();
    upcoming.sort_unstable();

    upcoming
        .into_iter()
        .map(|cancelled_date| CancelledDateEntry {
            cancelled_date,
            label: labels.get(&cancelled_date).cloned(),
        })
        .collect()
}

/// ## Summary
/// Renders the entries as a Markdown list, one `- DD.MM.YYYY (label)` line
/// per entry, or a placeholder sentence when there are none.
///
/// The result always ends with a newline.
#[must_use]
pub fn render_fragment(entries: &[CancelledDateEntry]) -> String {
    if entries.is_empty() {
        return format!("{NO_CANCELLATIONS_MESSAGE}\n");
    }

    entries
        .iter()
        .map(|entry| {
            let date = entry.cancelled_date.format("%d.%m.%Y");
            match entry.label.as_deref().filter(|label| !label.is_empty()) {
                Some(label) => format!("- {date} ({label})\n"),
                None => format!("- {date}\n"),
            }
        })
        .collect()
}
