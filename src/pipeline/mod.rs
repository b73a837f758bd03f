//! Pipeline entry point for submission runs.
//!
//! - `run_submitter`: submit every extracted URL to every enabled API

pub mod submit;

pub use submit::run_submitter;
