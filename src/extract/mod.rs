//! Extraction module: everything that turns markup into contacts
//!
//! - Pattern library for emails and Nepali phone numbers
//! - Phone normalization
//! - Framework detection
//! - Contact-zone extraction

mod framework;
pub mod patterns;
mod phone;
mod zones;

pub use framework::{
    detect_framework, detect_with_rules, FrameworkKind, FrameworkRule, MatchMode,
    FRAMEWORK_RULES,
};
pub use patterns::{is_gibberish_email, is_strict_email, normalize_email};
pub use phone::{classify_phone, normalize_phone, PhoneKind};
pub use zones::{extract_page, extract_zones, harvest_anchors, harvest_hrefs, sweep_emails, ZoneReport};
