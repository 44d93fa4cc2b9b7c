//! Contact-zone extraction
//!
//! Scanning a whole page for phone numbers picks up prices, dates and ids.
//! Phones are therefore only taken from contact zones: tags whose visible
//! text mentions a contact keyword, plus the page footer. `mailto:` and
//! `tel:` anchors are always harvested.

use crate::extract::patterns::{email_candidates, has_contact_keyword, phone_candidates, EMAIL_LOOSE};
use crate::state::ExtractionState;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Tags whose text is tested for contact keywords
static ZONE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div, section, p, li, span, footer, a").expect("valid zone selector")
});

static FOOTER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("footer").expect("valid footer selector"));

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

/// Counts of what one page contributed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneReport {
    /// Number of distinct zone texts scanned
    pub zones: usize,
    /// New emails added to the state
    pub emails: usize,
    /// New phones added to the state
    pub phones: usize,
}

impl ZoneReport {
    fn absorb(&mut self, other: ZoneReport) {
        self.zones += other.zones;
        self.emails += other.emails;
        self.phones += other.phones;
    }
}

/// Runs the full extraction over one HTML page
///
/// This covers, in order:
/// 1. A page-wide sweep of the raw markup with the loose email pattern
/// 2. `mailto:` and `tel:` anchors
/// 3. Keyword-selected contact zones and the footer
pub fn extract_page(html: &str, state: &mut ExtractionState) -> ZoneReport {
    let document = Html::parse_document(html);

    let mut report = ZoneReport {
        emails: sweep_emails(html, state),
        ..ZoneReport::default()
    };
    report.absorb(harvest_anchors(&document, state));
    report.absorb(extract_zones(&document, state));
    report
}

/// Adds every loose email match in the raw markup
///
/// Asset names such as `logo@2x.png` match here too; they are removed at cleanup.
pub fn sweep_emails(html: &str, state: &mut ExtractionState) -> usize {
    EMAIL_LOOSE
        .find_iter(html)
        .filter(|m| state.add_email(m.as_str()))
        .count()
}

/// Harvests `mailto:` and `tel:` anchors of a parsed document
pub fn harvest_anchors(document: &Html, state: &mut ExtractionState) -> ZoneReport {
    let hrefs: Vec<&str> = document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .collect();
    harvest_hrefs(hrefs, state)
}

/// Harvests `mailto:` and `tel:` values from a list of hrefs
///
/// A `mailto:` value must be a strict email once its query is removed; a
/// `tel:` value must yield a phone through the pattern cascade.
pub fn harvest_hrefs<'a, I>(hrefs: I, state: &mut ExtractionState) -> ZoneReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut report = ZoneReport::default();

    for href in hrefs {
        let href = href.trim();
        if let Some(address) = strip_scheme(href, "mailto:") {
            let address = address.split('?').next().unwrap_or_default();
            if state.add_email(address) {
                report.emails += 1;
            }
        } else if let Some(number) = strip_scheme(href, "tel:") {
            report.phones += add_phones(number, state);
        }
    }

    report
}

/// Applies the full pattern library to every contact zone of a document
pub fn extract_zones(document: &Html, state: &mut ExtractionState) -> ZoneReport {
    let mut report = ZoneReport::default();
    let mut scanned: HashSet<String> = HashSet::new();

    let keyword_zones = document
        .select(&ZONE_SELECTOR)
        .map(visible_text)
        .filter(|text| has_contact_keyword(&text.to_lowercase()));

    // Footer is always a zone, keyword or not
    let footer = document.select(&FOOTER_SELECTOR).next().map(visible_text);

    for text in keyword_zones.chain(footer) {
        if !scanned.insert(text.clone()) {
            continue;
        }
        report.zones += 1;
        report.phones += add_phones(&text, state);
        report.emails += email_candidates(&text)
            .into_iter()
            .filter(|candidate| state.add_email(candidate))
            .count();
    }

    report
}

/// Runs the phone cascade over `text`, adding every normalizable match
fn add_phones(text: &str, state: &mut ExtractionState) -> usize {
    phone_candidates(text)
        .into_iter()
        .filter(|candidate| state.add_phone(candidate))
        .count()
}

/// Visible text of an element, text nodes joined by single spaces
fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips a URI scheme case-insensitively
fn strip_scheme<'a>(href: &'a str, scheme: &str) -> Option<&'a str> {
    let prefix = href.get(..scheme.len())?;
    prefix
        .eq_ignore_ascii_case(scheme)
        .then(|| &href[scheme.len()..])
}
