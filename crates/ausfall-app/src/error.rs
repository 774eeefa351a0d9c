use std::path::PathBuf;

use thiserror::Error;

use crate::patch::MarkerError;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load calendar {}: {source}", path.display())]
    Calendar {
        path: PathBuf,
        #[source]
        source: ausfall_rfc::error::RfcError,
    },

    #[error("Invalid label file {}: {source}", path.display())]
    Labels {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Label file {} must contain a mapping of dates to labels", path.display())]
    LabelShape { path: PathBuf },

    #[error(transparent)]
    Markers(#[from] MarkerError),

    #[error(transparent)]
    CoreError(#[from] ausfall_core::error::CoreError),
}

impl AppError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
