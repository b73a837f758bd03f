// src/services/bing.rs

//! Bing URL Submission API client.
//!
//! <https://www.bing.com/webmasters/url-submission-api#APIs>

use async_trait::async_trait;
use serde::Serialize;

use crate::models::{Outcome, SubmissionResult};
use crate::services::Submitter;
use crate::utils::url::site_root;

const API_NAME: &str = "bing";

/// JSON body for the SubmitUrlbatch endpoint.
#[derive(Debug, Serialize)]
struct SubmitUrlBatch<'a> {
    #[serde(rename = "siteUrl")]
    site_url: &'a str,
    #[serde(rename = "urlList")]
    url_list: &'a [&'a str],
}

/// Client for the Bing URL Submission API.
///
/// The API key travels as the `apikey` query parameter.
pub struct BingSubmitter {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl BingSubmitter {
    pub fn new(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Submit several URLs from one site in a single SubmitUrlbatch call,
    /// capped at `limit` entries.
    ///
    /// The orchestrator submits per URL; this entry point exists for
    /// callers that prefer one batched request per run.
    pub async fn submit_batch(
        &self,
        urls: &[String],
        site_url: &str,
        limit: usize,
    ) -> SubmissionResult {
        let capped: Vec<&str> = urls.iter().take(limit).map(String::as_str).collect();
        let mut result = self.post(site_url, &capped, site_url).await;
        if result.outcome == Outcome::Accepted {
            result.message = format!("accepted batch of {} URLs", capped.len());
        }
        result
    }

    /// POST one SubmitUrlbatch request and classify the response.
    async fn post(&self, site_url: &str, url_list: &[&str], subject: &str) -> SubmissionResult {
        let body = SubmitUrlBatch { site_url, url_list };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("apikey", self.api_key.as_str())])
            .header("Content-Type", "application/json; charset=utf-8")
            .json(&body)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    SubmissionResult::accepted(API_NAME, subject, status.as_u16())
                } else {
                    SubmissionResult::rejected(
                        API_NAME,
                        subject,
                        status.as_u16(),
                        rejection_message(status.as_u16()),
                    )
                }
            }
            Err(e) => SubmissionResult::network_error(API_NAME, subject, e),
        }
    }
}

fn rejection_message(status: u16) -> String {
    match status {
        429 => "rate limit exceeded (status 429)".to_string(),
        401 | 403 => format!("API key rejected (status {status})"),
        _ => format!("submission refused (status {status})"),
    }
}

#[async_trait]
impl Submitter for BingSubmitter {
    fn name(&self) -> &'static str {
        API_NAME
    }

    async fn submit(&self, url: &str) -> SubmissionResult {
        let site_url = match site_root(url) {
            Ok(root) => root,
            Err(e) => return SubmissionResult::invalid(API_NAME, url, e),
        };
        self.post(&site_url, &[url], url).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::models::Outcome;

    fn submitter(endpoint: &str) -> BingSubmitter {
        BingSubmitter::new(reqwest::Client::new(), endpoint, "test-key")
    }

    #[tokio::test]
    async fn test_submit_accepted_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(query_param("apikey", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "siteUrl": "https://example.com",
                "urlList": ["https://example.com/a"],
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let result = submitter(&server.uri())
            .submit("https://example.com/a")
            .await;

        assert_eq!(result.outcome, Outcome::Accepted);
        assert_eq!(result.status, Some(200));
        assert_eq!(result.api, "bing");
    }

    #[tokio::test]
    async fn test_submit_rejected_on_403() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let result = submitter(&server.uri())
            .submit("https://example.com/a")
            .await;

        assert_eq!(result.outcome, Outcome::Rejected);
        assert_eq!(result.status, Some(403));
        assert!(result.message.contains("API key rejected"));
    }

    #[tokio::test]
    async fn test_submit_network_error_on_refused_connection() {
        // Nothing listens on port 1
        let result = submitter("http://127.0.0.1:1")
            .submit("https://example.com/a")
            .await;

        assert_eq!(result.outcome, Outcome::NetworkError);
        assert_eq!(result.status, None);
    }

    #[tokio::test]
    async fn test_submit_invalid_url_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = submitter(&server.uri()).submit("not-a-url").await;
        assert_eq!(result.outcome, Outcome::Rejected);
        assert_eq!(result.status, None);
    }

    #[tokio::test]
    async fn test_submit_batch_caps_at_limit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "urlList": ["https://example.com/a", "https://example.com/b"],
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let urls = vec![
            "https://example.com/a".to_string(),
            "https://example.com/b".to_string(),
            "https://example.com/c".to_string(),
        ];
        let result = submitter(&server.uri())
            .submit_batch(&urls, "https://example.com", 2)
            .await;

        assert_eq!(result.outcome, Outcome::Accepted);
        assert!(result.message.contains("2 URLs"));
    }
}
