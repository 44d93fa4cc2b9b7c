//! Contact-Scout: a per-site contact discovery engine
//!
//! This crate discovers email addresses and Nepali phone numbers on business
//! websites. Each site gets one bounded, strictly sequential discovery run
//! (static fetch, contact-zone extraction, sitemap and hyperlink discovery,
//! an optional browser-rendered pass) that always ends in a `FinalResult`.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod render;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Contact-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] crawler::FetchError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid stage transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::RunStage,
        to: state::RunStage,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for Contact-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_batch, BatchRunner, SiteRun};
pub use output::{ContactField, FinalResult};
pub use render::{RenderedPage, Renderer};
pub use state::{ExtractionState, FrameworkKind, RunStage};
pub use url::{root_domain, ScrapeTarget};
