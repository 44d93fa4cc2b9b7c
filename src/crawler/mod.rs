//! Crawler module for site discovery runs
//!
//! This module contains the network-facing discovery logic, including:
//! - HTTP fetching with the alternate-header retry
//! - Sitemap discovery of about/contact pages
//! - One-hop hyperlink crawling
//! - The per-site run state machine
//! - Bounded-concurrency batches

mod batch;
mod fetcher;
mod links;
mod orchestrator;
mod sitemap;

pub use batch::{run_batch, BatchRunner, CancelHandle};
pub use fetcher::{build_http_client, FetchError, Fetcher, HeaderProfile, PageFetchResult};
pub use links::{crawl_links, select_contact_links};
pub use orchestrator::{discover_site, SiteRun};
pub use sitemap::{collect_about_pages, discover_about_pages, SITEMAP_PATHS};
