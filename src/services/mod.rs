// src/services/mod.rs

//! Sitemap parsing and submission clients.

mod bing;
mod indexnow;
mod sitemap;

pub use bing::BingSubmitter;
pub use indexnow::IndexNowSubmitter;
pub use sitemap::SitemapParser;

use async_trait::async_trait;

use crate::models::SubmissionResult;

/// Capability shared by all submission targets.
///
/// Implementations make one outbound HTTP call per `submit` and never
/// return an error: every failure mode is folded into the
/// [`SubmissionResult`] so a single URL cannot abort the run. Adding a
/// further indexing target means one more implementation of this trait.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Short API name used in results and logs.
    fn name(&self) -> &'static str;

    /// Submit a single URL to the target API.
    async fn submit(&self, url: &str) -> SubmissionResult;
}
