use thiserror::Error;

use crate::ical::parse::ParseError;

/// Errors raised while reading calendar data.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Calendar is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("Calendar parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
