//! Nepali phone-number normalization
//!
//! Every phone candidate passes through [`normalize_phone`] before it is
//! stored; raw matches are never kept.

const COUNTRY_CODE: &str = "977";

/// Bounds on significant digits once country code and trunk zero are removed
const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;

/// Significant digits of a landline (area code plus local number)
const LANDLINE_DIGITS: std::ops::RangeInclusive<usize> = 7..=8;

/// Significant digits of a mobile number
const MOBILE_DIGITS: usize = 10;

/// How a digit string was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneKind {
    /// Kathmandu valley landline (area code 1)
    Kathmandu,
    /// Landline outside the valley, two-digit area code
    Landline,
    /// 10-digit mobile starting with 9
    Mobile,
    /// 8-leading number of non-landline length, kept as-is
    Legacy,
}

/// Normalizes a raw phone match into its canonical form
///
/// Returns `None` when the candidate does not fit the numbering plan.
///
/// # Canonical forms
///
/// | Input | Output |
/// |-------|--------|
/// | `+977-61-531234` | `061531234` |
/// | `01-4261234` | `014261234` |
/// | `9841234567` | `9841234567` |
///
/// # Examples
///
/// ```
/// use contact_scout::extract::normalize_phone;
///
/// assert_eq!(normalize_phone("+977-61-531234").as_deref(), Some("061531234"));
/// assert_eq!(normalize_phone("12-34"), None);
/// ```
pub fn normalize_phone(raw: &str) -> Option<String> {
    classify_phone(raw).map(|(canonical, _)| canonical)
}

/// Normalizes a raw phone match and reports how it was classified
pub fn classify_phone(raw: &str) -> Option<(String, PhoneKind)> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let significant = strip_prefixes(&digits);

    if !(MIN_DIGITS..=MAX_DIGITS).contains(&significant.len()) {
        return None;
    }

    let len = significant.len();
    match significant.as_bytes()[0] {
        b'1' if LANDLINE_DIGITS.contains(&len) => {
            Some((format!("0{}", significant), PhoneKind::Kathmandu))
        }
        b'9' if len == MOBILE_DIGITS => Some((significant.to_string(), PhoneKind::Mobile)),
        // Legacy behavior: 8-leading numbers that are not landlines are not
        // rebuilt the way 9-leading mobiles are.
        b'8' if !LANDLINE_DIGITS.contains(&len) => {
            Some((significant.to_string(), PhoneKind::Legacy))
        }
        b'2'..=b'9' if LANDLINE_DIGITS.contains(&len) => {
            Some((format!("0{}", significant), PhoneKind::Landline))
        }
        _ => None,
    }
}

/// Removes the country code, then at most one trunk zero
///
/// A bare 10-digit string is a mobile number even when it starts with `977`.
fn strip_prefixes(digits: &str) -> &str {
    let without_country = match digits.strip_prefix(COUNTRY_CODE) {
        Some(rest) if digits.len() != MOBILE_DIGITS => rest,
        _ => digits,
    };
    without_country
        .strip_prefix('0')
        .unwrap_or(without_country)
}
