//! Replacement of the generated block inside the target document.

use std::path::Path;

use ausfall_core::config::MarkerConfig;
use thiserror::Error;

use crate::error::{AppError, AppResult};

/// The document's markers do not delimit a usable block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    #[error("Begin marker '{0}' not found")]
    MissingBegin(String),

    #[error("End marker '{0}' not found")]
    MissingEnd(String),

    #[error("End marker '{end}' appears before begin marker '{begin}' ends")]
    OutOfOrder { begin: String, end: String },
}

/// Result of [`patch_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Written,
    /// The document already contained the generated block.
    Unchanged,
}

/// ## Summary
/// Replaces everything between the first begin marker and the first end
/// marker with a newline followed by `generated`. Both markers and all text
/// outside them are kept byte for byte.
///
/// ## Errors
/// Returns an error if a marker is missing or the end marker starts before
/// the begin marker ends.
pub fn replace_generated_block(
    text: &str,
    generated: &str,
    markers: &MarkerConfig,
) -> Result<String, MarkerError> {
    let begin = text
        .find(&markers.begin)
        .ok_or_else(|| MarkerError::MissingBegin(markers.begin.clone()))?;
    let end = text
        .find(&markers.end)
        .ok_or_else(|| MarkerError::MissingEnd(markers.end.clone()))?;

    let content_start = begin + markers.begin.len();
    if end < content_start {
        return Err(MarkerError::OutOfOrder {
            begin: markers.begin.clone(),
            end: markers.end.clone(),
        });
    }

    let mut patched = String::with_capacity(text.len() + generated.len() + 1);
    patched.push_str(&text[..content_start]);
    patched.push('\n');
    patched.push_str(generated);
    patched.push_str(&text[end..]);
    Ok(patched)
}

/// ## Summary
/// Patches the document at `path` in place.
///
/// The file is overwritten once, and only when its content changes.
///
/// ## Errors
/// Returns an error if the file cannot be read or written, or if its
/// markers are invalid. On error the file is left untouched.
#[tracing::instrument(skip(path, generated, markers), fields(path = %path.display()))]
pub fn patch_document(
    path: &Path,
    generated: &str,
    markers: &MarkerConfig,
) -> AppResult<PatchOutcome> {
    let current = std::fs::read_to_string(path).map_err(|e| AppError::io("read", path, e))?;
    let patched = replace_generated_block(&current, generated, markers)?;

    if patched == current {
        tracing::info!("Document unchanged");
        return Ok(PatchOutcome::Unchanged);
    }

    std::fs::write(path, patched).map_err(|e| AppError::io("write", path, e))?;
    tracing::info!("Document updated");
    Ok(PatchOutcome::Written)
}
