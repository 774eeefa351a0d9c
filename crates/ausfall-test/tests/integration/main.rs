//! End-to-end runs of the pipeline against files in scratch directories.

mod calendar_files;
mod helpers;
mod pipeline;
