// src/services/indexnow.rs

//! IndexNow API client.
//!
//! <https://www.bing.com/indexnow/getstarted>
//!
//! IndexNow is a cross-engine notification protocol: one submission
//! reaches every participating search engine. Key ownership is proven by
//! a `{key}.txt` file hosted at the site root, referenced here as
//! `keyLocation`; hosting that file is the site owner's responsibility.

use async_trait::async_trait;
use serde::Serialize;

use crate::models::SubmissionResult;
use crate::services::Submitter;
use crate::utils::url::{host, site_root};

const API_NAME: &str = "indexnow";

/// JSON body for the IndexNow endpoint.
#[derive(Debug, Serialize)]
struct IndexNowBody<'a> {
    host: &'a str,
    key: &'a str,
    #[serde(rename = "keyLocation")]
    key_location: String,
    #[serde(rename = "urlList")]
    url_list: &'a [&'a str],
}

/// Client for the IndexNow API.
pub struct IndexNowSubmitter {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl IndexNowSubmitter {
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
}

/// IndexNow replies 200 (ok) or 202 (key validation pending); both count
/// as accepted.
fn is_accepted(status: u16) -> bool {
    status == 200 || status == 202
}

fn rejection_message(status: u16) -> String {
    match status {
        429 => "rate limit exceeded (status 429)".to_string(),
        403 => "API key not valid for this host (status 403)".to_string(),
        422 => "URL does not belong to the host (status 422)".to_string(),
        _ => format!("submission refused (status {status})"),
    }
}

#[async_trait]
impl Submitter for IndexNowSubmitter {
    fn name(&self) -> &'static str {
        API_NAME
    }

    async fn submit(&self, url: &str) -> SubmissionResult {
        let (url_host, root) = match (host(url), site_root(url)) {
            (Ok(h), Ok(r)) => (h, r),
            (Err(e), _) | (_, Err(e)) => return SubmissionResult::invalid(API_NAME, url, e),
        };

        let body = IndexNowBody {
            host: &url_host,
            key: &self.api_key,
            key_location: format!("{}/{}.txt", root, self.api_key),
            url_list: &[url],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json; charset=utf-8")
            .json(&body)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status().as_u16();
                if is_accepted(status) {
                    SubmissionResult::accepted(API_NAME, url, status)
                } else {
                    SubmissionResult::rejected(API_NAME, url, status, rejection_message(status))
                }
            }
            Err(e) => SubmissionResult::network_error(API_NAME, url, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::models::Outcome;

    fn submitter(endpoint: &str) -> IndexNowSubmitter {
        IndexNowSubmitter::new(reqwest::Client::new(), endpoint, "abc123")
    }

    #[tokio::test]
    async fn test_submit_sends_key_location() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "host": "example.com",
                "key": "abc123",
                "keyLocation": "https://example.com/abc123.txt",
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
    }

    #[tokio::test]
    async fn test_submit_accepted_on_202() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server)
            .await;

        let result = submitter(&server.uri())
            .submit("https://example.com/a")
            .await;

        assert_eq!(result.outcome, Outcome::Accepted);
        assert_eq!(result.status, Some(202));
    }

    #[tokio::test]
    async fn test_submit_rejected_on_429_names_rate_limit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let result = submitter(&server.uri())
            .submit("https://example.com/a")
            .await;

        assert_eq!(result.outcome, Outcome::Rejected);
        assert_eq!(result.status, Some(429));
        assert!(result.message.contains("rate limit"));
    }

    #[tokio::test]
    async fn test_submit_network_error_on_refused_connection() {
        let result = submitter("http://127.0.0.1:1")
            .submit("https://example.com/a")
            .await;

        assert_eq!(result.outcome, Outcome::NetworkError);
    }
}
