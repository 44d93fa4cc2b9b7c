//! Pattern library: email and phone matchers plus the fixed keyword tables
//!
//! Every table here is a process-wide constant built once on first use and
//! never mutated afterwards.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Valid Nepali area codes, as they appear on pages (with and without the trunk `0`)
pub const AREA_CODES: &[&str] = &[
    // 2-digit
    "01", "10", "11", "19", "21", "23", "24", "25", "26", "27", "29", "31", "33", "35", "36",
    "37", "38", "41", "44", "46", "47", "48", "49", "51", "53", "55", "56", "57", "61", "63",
    "64", "65", "66", "67", "68", "69", "71", "75", "76", "77", "78", "79", "81", "82", "83",
    "84", "86", "87", "88", "89", "91", "92", "93", "94", "95", "96", "97", "99",
    // 3-digit
    "010", "011", "019", "021", "023", "024", "025", "026", "027", "029", "031", "033", "035",
    "036", "037", "038", "041", "044", "046", "047", "048", "049", "051", "053", "055", "056",
    "057", "061", "063", "064", "065", "066", "067", "068", "069", "071", "075", "076", "077",
    "078", "079", "081", "082", "083", "084", "086", "087", "088", "089", "091", "092", "093",
    "094", "095", "096", "097", "099",
];

/// Visible-text keywords that mark a tag as a contact zone
pub const CONTACT_KEYWORDS: &[&str] = &[
    "contact",
    "email",
    "phone",
    "call",
    "mobile",
    "landline",
    "support",
    "reach us",
    "get in touch",
    "address",
    "location",
];

/// Likely contact pages probed on every site, school/college sections first
pub const COMMON_PATHS: &[&str] = &[
    "/college",
    "/school",
    "/hss",
    "/contact",
    "/contact-us",
    "/contact/",
    "/reach-us",
    "/get-in-touch",
];

/// Substrings marking an email match as a placeholder or an image asset
pub const GIBBERISH_MARKERS: &[&str] = &[
    "example", "yoursite", ".png", ".svg", ".jpg", ".jpeg", ".gif",
];

/// Href keywords that make the hyperlink crawler follow an anchor
pub const LINK_KEYWORDS: &[&str] = &["about", "contact"];

/// Loose email syntax, tolerant of `[at]` / `(at)` in place of `@`
pub static EMAIL_LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z0-9._%+-]+\s*(?:@|\[at\]|\(at\))\s*[a-z0-9.-]+\.[a-z]{2,}")
        .expect("valid loose email regex")
});

/// Strict RFC-shaped email syntax
pub static EMAIL_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").expect("valid strict email regex")
});

/// Anchored form of [`EMAIL_STRICT`], for validating a whole candidate
static EMAIL_STRICT_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("valid strict email regex")
});

/// Obfuscated `@` markers with their surrounding whitespace
static AT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:@|\[at\]|\(at\))\s*").expect("valid at-marker regex")
});

/// Sitemap entries that look like about/contact pages
pub static ABOUT_PAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https?://[^\s<>"']*?(?:about|contact|reach-us|team|info)[^\s<>"']*"#)
        .expect("valid about-page regex")
});

/// Strict: national prefix plus a 7-8 digit body, one separator at most
static PHONE_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \b(?:\+?977[-.\s]?)?
        (?:0[-.\s]?)?
        (
            9[78][0-9][-.\s]?[0-9]{7}
          | 1[-.\s]?[0-9]{7}
          | [2-9][0-9][-.\s]?[0-9]{5}
        )\b",
    )
    .expect("valid strict phone regex")
});

/// Separator-tolerant: a mobile may carry one separator between any two digits
static PHONE_SEPARATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \b(?:\+?977[-.\s]?)?
        (?:0[-.\s]?)?
        (
            9[78][0-9](?:[-.\s]?[0-9]){7}
          | 1[-.\s]?[0-9]{7}
          | [2-9][0-9][-.\s]?[0-9]{5}
        )\b",
    )
    .expect("valid separated phone regex")
});

/// Mobile-group tolerant: separators allowed between every digit
static PHONE_GROUPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \b(?:\+?977[-.\s]?)??
        (?:0[-.\s]?)?
        (
            9[78](?:[-.\s]*[0-9]){8}
          | 1[-.\s]?(?:[0-9][-.\s]*){7}
          | [2-9][0-9][-.\s]?(?:[0-9][-.\s]*){5}
        )\b",
    )
    .expect("valid grouped phone regex")
});

/// Area-code anchored: a known area code followed by enough digits for an 8-digit number
static PHONE_AREA_CODE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?x)
        \b(?:\+977[-.\s]?)?
        (?:0[-.\s]?)?
        (
            (?P<area>{})
            [-.\s]?
            [0-9](?:[-.\s]?[0-9]){{5,6}}
        )\b",
        area_code_alternation()
    );
    Regex::new(&pattern).expect("valid area-code phone regex")
});

/// Phone patterns in order of increasing permissiveness
pub static PHONE_CASCADE: LazyLock<[&'static Regex; 4]> = LazyLock::new(|| {
    [
        &*PHONE_STRICT,
        &*PHONE_SEPARATED,
        &*PHONE_GROUPED,
        &*PHONE_AREA_CODE,
    ]
});

/// Builds the area-code alternation, longest codes first so `010` wins over `01`
fn area_code_alternation() -> String {
    let mut codes: Vec<&str> = AREA_CODES.to_vec();
    codes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    codes.dedup();
    codes.join("|")
}

/// Returns every raw phone candidate found in `text` by any cascade pattern
///
/// Patterns run in cascade order and a match claims its span: a later,
/// looser pattern never yields a candidate overlapping an earlier one.
/// Candidates are raw matches; they must still pass the normalizer.
pub fn phone_candidates(text: &str) -> Vec<&str> {
    let mut claimed: Vec<Range<usize>> = Vec::new();
    let mut candidates = Vec::new();

    for pattern in PHONE_CASCADE.iter() {
        for m in pattern.find_iter(text) {
            if claimed
                .iter()
                .any(|span| m.start() < span.end && span.start < m.end())
            {
                continue;
            }
            claimed.push(m.range());
            candidates.push(m.as_str());
        }
    }

    candidates
}

/// Returns every raw email candidate found in `text` by either email pattern
pub fn email_candidates(text: &str) -> Vec<&str> {
    EMAIL_LOOSE
        .find_iter(text)
        .chain(EMAIL_STRICT.find_iter(text))
        .map(|m| m.as_str())
        .collect()
}

/// Canonicalizes an email candidate: de-obfuscates `[at]`/`(at)`, lower-cases
/// and requires the result to be a strict email
pub fn normalize_email(raw: &str) -> Option<String> {
    let joined = AT_MARKER.replace(raw.trim(), "@").to_lowercase();
    is_strict_email(&joined).then_some(joined)
}

/// Returns true if the whole string is a strict email address
pub fn is_strict_email(candidate: &str) -> bool {
    EMAIL_STRICT_FULL.is_match(candidate)
}

/// Returns true if the email contains a placeholder or asset marker
pub fn is_gibberish_email(email: &str) -> bool {
    let lowered = email.to_lowercase();
    GIBBERISH_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Returns true if the lower-cased text contains a contact keyword
pub fn has_contact_keyword(lowered_text: &str) -> bool {
    CONTACT_KEYWORDS
        .iter()
        .any(|keyword| lowered_text.contains(keyword))
}
