//! iCalendar parsing (RFC 5545).
//!
//! - Lexer: line splitting, unfolding and content line tokenization
//! - Values: DATE, DATE-TIME and TEXT value parsing
//! - Parser: component tree construction with typed property values

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{parse_content_line, split_lines};
pub use parser::{parse, parse_bytes};
pub use values::{parse_date, parse_datetime, unescape_text};
