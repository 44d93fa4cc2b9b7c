use url::Url;

/// Two-level public suffixes under which the registrable name is three labels long
const TWO_LEVEL_SUFFIXES: &[&str] = &["edu.np"];

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host (which shouldn't happen for valid HTTP(S) URLs), it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use contact_scout::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Reduces a host name to its root domain
///
/// The last two labels are kept, except under a two-level public suffix such
/// as `edu.np`, where the last three labels are kept. Hosts with fewer labels
/// than that are returned unchanged.
pub fn root_domain_of_host(host: &str) -> String {
    let host = host.trim_end_matches('.').to_lowercase();
    let labels: Vec<&str> = host.split('.').collect();

    let two_level = labels.len() >= 3
        && TWO_LEVEL_SUFFIXES
            .iter()
            .any(|suffix| host.ends_with(&format!(".{}", suffix)));

    let keep = if two_level { 3 } else { 2 };
    if labels.len() >= keep {
        labels[labels.len() - keep..].join(".")
    } else {
        host
    }
}

/// Computes the root domain of an absolute URL string
///
/// Returns None when the string is not an absolute URL with a host.
///
/// # Examples
///
/// ```
/// use contact_scout::url::root_domain;
///
/// assert_eq!(root_domain("https://eng.example.edu.np/x"), Some("example.edu.np".to_string()));
/// assert_eq!(root_domain("https://shop.example.com/x"), Some("example.com".to_string()));
/// ```
pub fn root_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    extract_domain(&parsed).map(|host| root_domain_of_host(&host))
}
