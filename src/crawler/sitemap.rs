//! Sitemap discovery of about and contact pages

use crate::crawler::fetcher::Fetcher;
use crate::extract::patterns::ABOUT_PAGE;
use crate::state::ExtractionState;
use crate::url::ScrapeTarget;

/// Sitemap locations tried in order at the target root
pub const SITEMAP_PATHS: &[&str] = &["/sitemap.xml", "/sitemap"];

/// Fetches the target's sitemap and records its about/contact pages
///
/// Every path in [`SITEMAP_PATHS`] is tried. Each 2xx response sets
/// `has_sitemap` and contributes its same-site about-page URLs. A failed
/// or non-2xx fetch contributes nothing and is not an error.
///
/// # Returns
///
/// The number of newly recorded about pages
pub async fn discover_about_pages(
    fetcher: &Fetcher,
    target: &ScrapeTarget,
    state: &mut ExtractionState,
) -> usize {
    let mut discovered = 0;

    for path in SITEMAP_PATHS {
        let sitemap_url = target.join_path(path);
        match fetcher.fetch(&sitemap_url).await {
            Ok(page) if page.succeeded => {
                state.set_has_sitemap();
                discovered += collect_about_pages(&page.html, target, state);
            }
            Ok(page) => {
                tracing::debug!("{} returned {}", sitemap_url, page.status_code);
            }
            Err(e) => {
                tracing::debug!("No sitemap at {}: {}", sitemap_url, e);
            }
        }
    }

    if discovered > 0 {
        tracing::debug!(
            "Found {} about/contact pages in sitemap of {}",
            discovered,
            target.base()
        );
    }
    discovered
}

/// Extracts same-site about/contact URLs from sitemap text
pub fn collect_about_pages(
    sitemap: &str,
    target: &ScrapeTarget,
    state: &mut ExtractionState,
) -> usize {
    ABOUT_PAGE
        .find_iter(sitemap)
        .map(|m| m.as_str())
        .filter(|url| target.is_same_site(url))
        .filter(|url| state.add_about_page(url))
        .count()
}
