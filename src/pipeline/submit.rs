// src/pipeline/submit.rs

//! URL submission pipeline.

use crate::error::{AppError, Result};
use crate::models::{Outcome, RunSummary};
use crate::services::Submitter;

/// Submit every URL to every enabled API, sequentially.
///
/// A per-URL failure is logged and counted but never aborts the run.
/// Fatal conditions (no URLs, no enabled APIs) fail before any request
/// is made.
pub async fn run_submitter(
    urls: &[String],
    submitters: &[Box<dyn Submitter>],
) -> Result<RunSummary> {
    if urls.is_empty() {
        return Err(AppError::validation("No URLs to submit"));
    }
    if submitters.is_empty() {
        return Err(AppError::config("No submission APIs enabled"));
    }

    let api_names: Vec<&str> = submitters.iter().map(|s| s.name()).collect();
    log::info!(
        "Submitting {} URLs to {} API(s): {}",
        urls.len(),
        submitters.len(),
        api_names.join(", ")
    );

    let mut summary = RunSummary::new(urls.len());

    for url in urls {
        for submitter in submitters {
            let result = submitter.submit(url).await;

            match result.outcome {
                Outcome::Accepted => {
                    log::debug!("{} accepted {}", result.api, result.url);
                }
                Outcome::Rejected => {
                    log::warn!("{} rejected {}: {}", result.api, result.url, result.message);
                }
                Outcome::NetworkError => {
                    log::error!(
                        "Network failure submitting {} to {}: {}",
                        result.url,
                        result.api,
                        result.message
                    );
                }
            }

            summary.record(&result);
        }
    }

    summary.log();
    Ok(summary)
}
