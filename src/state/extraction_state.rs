use crate::extract::{is_gibberish_email, normalize_email, normalize_phone, FrameworkKind};
use std::collections::{BTreeSet, HashSet};

/// Accumulated findings of one site discovery run
///
/// Owned by exactly one run and never shared. Emails are stored lower-cased
/// and phones only in canonical form, so the sets never hold two spellings
/// of the same contact.
#[derive(Debug, Clone, Default)]
pub struct ExtractionState {
    emails: BTreeSet<String>,
    phones: BTreeSet<String>,
    about_pages: BTreeSet<String>,
    seen_links: HashSet<String>,
    has_sitemap: bool,
    framework: Option<FrameworkKind>,
}

impl ExtractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes and stores an email candidate
    ///
    /// Returns true if a new address was added. Candidates that are not
    /// strict emails after normalization are dropped silently.
    pub fn add_email(&mut self, raw: &str) -> bool {
        match normalize_email(raw) {
            Some(email) => self.emails.insert(email),
            None => false,
        }
    }

    /// Normalizes and stores a phone candidate
    ///
    /// Returns true if a new number was added. Candidates rejected by the
    /// normalizer are dropped silently.
    pub fn add_phone(&mut self, raw: &str) -> bool {
        match normalize_phone(raw) {
            Some(phone) => self.phones.insert(phone),
            None => false,
        }
    }

    /// Records an about/contact page discovered through the sitemap
    pub fn add_about_page(&mut self, url: &str) -> bool {
        self.about_pages.insert(url.to_string())
    }

    /// Marks a link as seen; returns false if it had been seen before
    pub fn mark_seen(&mut self, url: &str) -> bool {
        self.seen_links.insert(url.to_string())
    }

    pub fn has_seen(&self, url: &str) -> bool {
        self.seen_links.contains(url)
    }

    pub fn set_has_sitemap(&mut self) {
        self.has_sitemap = true;
    }

    /// Records the framework classification
    ///
    /// The first classification is final; later calls are ignored and
    /// return false.
    pub fn record_framework(&mut self, kind: FrameworkKind) -> bool {
        if self.framework.is_some() {
            return false;
        }
        self.framework = Some(kind);
        true
    }

    /// The recorded classification, `None` kind if not yet classified
    pub fn framework(&self) -> FrameworkKind {
        self.framework.unwrap_or_default()
    }

    /// Drops every email containing a gibberish marker, returning how many were removed
    pub fn remove_gibberish_emails(&mut self) -> usize {
        let before = self.emails.len();
        self.emails.retain(|email| !is_gibberish_email(email));
        before - self.emails.len()
    }

    pub fn emails(&self) -> &BTreeSet<String> {
        &self.emails
    }

    pub fn phones(&self) -> &BTreeSet<String> {
        &self.phones
    }

    pub fn about_pages(&self) -> &BTreeSet<String> {
        &self.about_pages
    }

    pub fn seen_link_count(&self) -> usize {
        self.seen_links.len()
    }

    pub fn has_sitemap(&self) -> bool {
        self.has_sitemap
    }

    /// Returns true if either emails or phones are still missing
    pub fn is_incomplete(&self) -> bool {
        self.emails.is_empty() || self.phones.is_empty()
    }

    /// Consumes the state, yielding sorted emails and phones
    pub fn into_contacts(self) -> (Vec<String>, Vec<String>) {
        (
            self.emails.into_iter().collect(),
            self.phones.into_iter().collect(),
        )
    }
}
