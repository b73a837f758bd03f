// src/utils/url.rs

//! URL manipulation utilities.

use crate::error::{AppError, Result};

/// Extract the site root (`scheme://host[:port]`) from an absolute URL.
///
/// # Examples
/// ```
/// use submitter::utils::url::site_root;
///
/// assert_eq!(
///     site_root("https://example.com/posts/a").unwrap(),
///     "https://example.com"
/// );
/// ```
pub fn site_root(url: &str) -> Result<String> {
    let parsed = url::Url::parse(url)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| AppError::validation(format!("URL has no host: {url}")))?;

    Ok(match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    })
}

/// Extract the host from an absolute URL, lowercased.
pub fn host(url: &str) -> Result<String> {
    let parsed = url::Url::parse(url)?;
    parsed
        .host_str()
        .map(|h| h.to_lowercase())
        .ok_or_else(|| AppError::validation(format!("URL has no host: {url}")))
}
