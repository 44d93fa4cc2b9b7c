//! URL handling module for Contact-Scout
//!
//! This module provides seed URL normalization, domain extraction and the
//! root-domain rule that decides whether two URLs belong to the same site.

mod domain;
mod normalize;

use crate::UrlError;
use ::url::Url;

// Re-export main functions
pub use domain::{extract_domain, root_domain, root_domain_of_host};
pub use normalize::{normalize_url, strip_trailing_slash};

/// A website selected for one discovery run
///
/// Immutable for the lifetime of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeTarget {
    url: Url,
    base: String,
    root_domain: String,
}

impl ScrapeTarget {
    /// Parses and normalizes a seed URL into a target
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_scout::url::ScrapeTarget;
    ///
    /// let target = ScrapeTarget::parse("https://eng.example.edu.np/").unwrap();
    /// assert_eq!(target.root_domain(), "example.edu.np");
    /// assert_eq!(target.base(), "https://eng.example.edu.np");
    /// ```
    pub fn parse(url_str: &str) -> Result<Self, UrlError> {
        let url = normalize_url(url_str)?;
        let host = extract_domain(&url).ok_or(UrlError::MissingDomain)?;
        let root_domain = root_domain_of_host(&host);
        let base = strip_trailing_slash(&url);

        Ok(Self {
            url,
            base,
            root_domain,
        })
    }

    /// The normalized target URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The target URL without trailing slashes
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    /// Joins a site-relative path such as `/contact` onto the target base
    pub fn join_path(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Returns true if `url` is an absolute URL on the same root domain
    ///
    /// Root-domain comparison is the only same-site rule used while crawling.
    pub fn is_same_site(&self, url: &str) -> bool {
        root_domain(url).is_some_and(|root| root == self.root_domain)
    }
}
