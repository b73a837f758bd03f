//! Submission outcome data structures.

use std::collections::BTreeMap;
use std::fmt;

/// Three-way classification of one URL submitted to one API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The API accepted the URL (HTTP 2xx)
    Accepted,
    /// The API refused the URL (bad key, rate limit, ...)
    Rejected,
    /// The request never completed (DNS, connect, timeout)
    NetworkError,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Accepted => "accepted",
            Outcome::Rejected => "rejected",
            Outcome::NetworkError => "network error",
        };
        f.write_str(s)
    }
}

/// Result of submitting one URL to one API.
#[derive(Debug, Clone)]
pub struct SubmissionResult {
    /// Target API name (e.g. "bing")
    pub api: &'static str,

    /// The submitted URL
    pub url: String,

    /// Outcome classification
    pub outcome: Outcome,

    /// HTTP status code, when a response was received
    pub status: Option<u16>,

    /// Diagnostic message
    pub message: String,
}

impl SubmissionResult {
    /// Record an accepted submission.
    pub fn accepted(api: &'static str, url: impl Into<String>, status: u16) -> Self {
        Self {
            api,
            url: url.into(),
            outcome: Outcome::Accepted,
            status: Some(status),
            message: format!("accepted with status {status}"),
        }
    }

    /// Record a rejected submission.
    pub fn rejected(
        api: &'static str,
        url: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self {
            api,
            url: url.into(),
            outcome: Outcome::Rejected,
            status: Some(status),
            message: message.into(),
        }
    }

    /// Record a URL refused locally, before any request was made.
    pub fn invalid(api: &'static str, url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self {
            api,
            url: url.into(),
            outcome: Outcome::Rejected,
            status: None,
            message: message.to_string(),
        }
    }

    /// Record a failed network round-trip.
    pub fn network_error(
        api: &'static str,
        url: impl Into<String>,
        message: impl fmt::Display,
    ) -> Self {
        Self {
            api,
            url: url.into(),
            outcome: Outcome::NetworkError,
            status: None,
            message: message.to_string(),
        }
    }
}

/// Per-API submission counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiCounts {
    pub accepted: usize,
    pub rejected: usize,
    pub network_errors: usize,
}

impl ApiCounts {
    /// Total submissions attempted against this API.
    pub fn total(&self) -> usize {
        self.accepted + self.rejected + self.network_errors
    }
}

/// Aggregate counts for one run; produced once, logged, never persisted.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of URLs extracted from the sitemap
    pub total_urls: usize,

    /// Counters keyed by API name
    pub apis: BTreeMap<&'static str, ApiCounts>,
}

impl RunSummary {
    pub fn new(total_urls: usize) -> Self {
        Self {
            total_urls,
            apis: BTreeMap::new(),
        }
    }

    /// Fold one submission result into the counters.
    pub fn record(&mut self, result: &SubmissionResult) {
        let counts = self.apis.entry(result.api).or_default();
        match result.outcome {
            Outcome::Accepted => counts.accepted += 1,
            Outcome::Rejected => counts.rejected += 1,
            Outcome::NetworkError => counts.network_errors += 1,
        }
    }

    /// Total submission calls made across all APIs.
    pub fn total_submissions(&self) -> usize {
        self.apis.values().map(ApiCounts::total).sum()
    }

    /// Emit the summary as log lines.
    pub fn log(&self) {
        log::info!("Run summary: {} URLs processed", self.total_urls);
        for (api, counts) in &self.apis {
            log::info!(
                "  {}: {} accepted, {} rejected, {} network errors",
                api,
                counts.accepted,
                counts.rejected,
                counts.network_errors
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_per_api() {
        let mut summary = RunSummary::new(2);
        summary.record(&SubmissionResult::accepted("bing", "https://e.com/a", 200));
        summary.record(&SubmissionResult::rejected(
            "bing",
            "https://e.com/b",
            429,
            "rate limited",
        ));
        summary.record(&SubmissionResult::network_error(
            "indexnow",
            "https://e.com/a",
            "connection refused",
        ));

        let bing = summary.apis["bing"];
        assert_eq!(bing.accepted, 1);
        assert_eq!(bing.rejected, 1);
        assert_eq!(bing.total(), 2);

        let indexnow = summary.apis["indexnow"];
        assert_eq!(indexnow.network_errors, 1);
        assert_eq!(summary.total_submissions(), 3);
    }

    #[test]
    fn test_result_constructors() {
        let ok = SubmissionResult::accepted("bing", "https://e.com/a", 200);
        assert_eq!(ok.outcome, Outcome::Accepted);
        assert_eq!(ok.status, Some(200));

        let err = SubmissionResult::network_error("indexnow", "https://e.com/a", "timeout");
        assert_eq!(err.outcome, Outcome::NetworkError);
        assert_eq!(err.status, None);
        assert_eq!(err.message, "timeout");
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Accepted.to_string(), "accepted");
        assert_eq!(Outcome::NetworkError.to_string(), "network error");
    }
}
