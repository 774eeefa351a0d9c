//! Optional date labels read from a YAML mapping.
//!
//! ```yaml
//! 2025-03-01: Ferien
//! "2025-12-27": Weihnachtspause
//! ```

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;
use serde_yaml::Value;

use crate::error::{AppError, AppResult};

/// Label text per cancelled date.
pub type LabelTable = HashMap<NaiveDate, String>;

/// ## Summary
/// Loads the label table, treating a missing file as an empty table.
///
/// ## Errors
/// Returns an error if the file exists but cannot be read, is not valid
/// YAML, or its top level is not a mapping.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_labels(path: &Path) -> AppResult<LabelTable> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No label file, continuing without labels");
            return Ok(LabelTable::new());
        }
        Err(e) => return Err(AppError::io("read", path, e)),
    };

    let labels = parse_labels(&text, path)?;
    tracing::debug!(count = labels.len(), "Loaded labels");
    Ok(labels)
}

/// ## Summary
/// Parses the YAML text of a label file.
///
/// Entries whose key or value is not a string are skipped, as are keys that
/// are not `YYYY-MM-DD` dates. Values are trimmed. `path` is only used for
/// error reporting.
///
/// ## Errors
/// Returns an error if the text is not valid YAML or its top level is
/// neither empty nor a mapping.
pub fn parse_labels(text: &str, path: &Path) -> AppResult<LabelTable> {
    if text.trim().is_empty() {
        return Ok(LabelTable::new());
    }

    let document: Value = serde_yaml::from_str(text).map_err(|source| AppError::Labels {
        path: path.to_path_buf(),
        source,
    })?;

    let mapping = match document {
        Value::Null => return Ok(LabelTable::new()),
        Value::Mapping(mapping) => mapping,
        _ => {
            return Err(AppError::LabelShape {
                path: path.to_path_buf(),
            });
        }
    };

    let mut labels = LabelTable::with_capacity(mapping.len());
    for (key, value) in mapping {
        let (Value::String(key), Value::String(label)) = (key, value) else {
            continue;
        };

        match NaiveDate::parse_from_str(&key, "%Y-%m-%d") {
            Ok(date) => {
                labels.insert(date, label.trim().to_string());
            }
            Err(e) => tracing::warn!(key = %key, error = %e, "Skipping label with invalid date"),
        }
    }

    Ok(labels)
}
