// src/models/mod.rs

//! Domain models for the submitter application.

mod config;
mod submission;

// Re-export all public types
pub use config::{
    BING_API_KEY_VAR, Config, Credentials, EndpointConfig, INDEXNOW_API_KEY_VAR, SubmitterConfig,
};
pub use submission::{ApiCounts, Outcome, RunSummary, SubmissionResult};
