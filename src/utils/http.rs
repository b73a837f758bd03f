// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::Result;
use crate::models::SubmitterConfig;

/// Create a configured HTTP client.
pub fn create_client(config: &SubmitterConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_with_defaults() {
        assert!(create_client(&SubmitterConfig::default()).is_ok());
    }
}
