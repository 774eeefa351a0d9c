//! Ausfall - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use
//! `ausfall_test::` paths.

pub mod component {
    pub use ausfall_core::*;
}

pub mod app {
    pub use ausfall_app::*;
}

pub use ausfall_rfc as rfc;
