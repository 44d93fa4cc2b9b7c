//! Hyperlink crawler
//!
//! Finds "About us" and "Contact" pages through the site's own anchors,
//! for sites that have no sitemap. Only one hop is followed: linked pages
//! are extracted but their anchors are not crawled.

use crate::crawler::fetcher::Fetcher;
use crate::extract::extract_page;
use crate::extract::patterns::LINK_KEYWORDS;
use crate::state::ExtractionState;
use crate::url::ScrapeTarget;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static HREF_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

/// Collects the contact-page links of `html` that have not been seen yet
///
/// Every absolute http(s) same-site href is marked as seen, whether or not
/// it names a contact page, so each link is considered once per run.
pub fn select_contact_links(
    html: &str,
    target: &ScrapeTarget,
    state: &mut ExtractionState,
) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for element in document.select(&HREF_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim();

        if !is_absolute_http(href) || state.has_seen(href) || !target.is_same_site(href) {
            continue;
        }
        state.mark_seen(href);

        let lowered = href.to_lowercase();
        if LINK_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            links.push(href.to_string());
        }
    }

    links
}

/// Follows the contact-page links of `html`, extracting each linked page
///
/// # Returns
///
/// The number of linked pages fetched successfully
pub async fn crawl_links(
    fetcher: &Fetcher,
    html: &str,
    target: &ScrapeTarget,
    state: &mut ExtractionState,
) -> usize {
    let mut fetched = 0;

    for link in select_contact_links(html, target, state) {
        tracing::debug!("Following contact link {}", link);
        match fetcher.fetch(&link).await {
            Ok(page) if page.succeeded => {
                let report = extract_page(&page.html, state);
                tracing::debug!(
                    "{}: {} emails, {} phones",
                    link,
                    report.emails,
                    report.phones
                );
                fetched += 1;
            }
            Ok(page) => tracing::warn!("{} returned {}", link, page.status_code),
            Err(e) => tracing::warn!("Failed to fetch {}: {}", link, e),
        }
    }

    fetched
}

fn is_absolute_http(href: &str) -> bool {
    let lowered = href.get(..8).unwrap_or(href).to_ascii_lowercase();
    lowered.starts_with("http://") || lowered.starts_with("https://")
}
