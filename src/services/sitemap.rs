// src/services/sitemap.rs

//! RSS sitemap parsing service.
//!
//! Extracts article URLs from the `<item><link>` pairs of an RSS-shaped
//! XML document, preserving document order.

use std::fs;
use std::path::PathBuf;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{AppError, Result};

/// Service for extracting URLs from an RSS sitemap file.
pub struct SitemapParser {
    path: PathBuf,
}

impl SitemapParser {
    /// Create a parser for the given sitemap file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse the sitemap and return all extracted URLs in document order.
    ///
    /// Fails when the file is unreadable, the XML is malformed, or no
    /// `<item><link>` pairs are present. Duplicates are kept as-is.
    pub fn parse(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)?;
        let urls = extract_item_links(&content)?;

        if urls.is_empty() {
            return Err(AppError::EmptySitemap(self.path.clone()));
        }

        log::info!(
            "Parsed sitemap {}: found {} URLs",
            self.path.display(),
            urls.len()
        );
        Ok(urls)
    }
}

/// Collect the text of every `<link>` nested in an `<item>`.
///
/// Unknown elements are skipped; only the item/link convention is required.
fn extract_item_links(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut item_depth = 0usize;
    let mut in_link = false;
    let mut current = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"item" => item_depth += 1,
                b"link" if item_depth > 0 => {
                    in_link = true;
                    current.clear();
                }
                _ => {}
            },
            Event::Text(ref e) if in_link => {
                current.push_str(&e.unescape().map_err(quick_xml::Error::from)?);
            }
            Event::CData(ref e) if in_link => {
                current.push_str(&String::from_utf8_lossy(e));
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"link" if in_link => {
                    in_link = false;
                    let url = current.trim();
                    if !url.is_empty() {
                        urls.push(url.to_string());
                    }
                }
                b"item" => item_depth = item_depth.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(urls)
}
