// src/lib.rs

//! RSS Sitemap URL Submitter Library

pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
