//! Script-rendering framework detection
//!
//! Classification is an ordered list of rules evaluated first-match-wins.
//! Vue is listed before the generic single-page-app rule, so a page carrying
//! both kinds of markers is classified as Vue.

use std::fmt;

/// Framework classification of a page's static markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrameworkKind {
    /// Static markup, no client-side rendering detected
    #[default]
    None,
    /// Generic single-page app (React-style root mount)
    React,
    /// Vue 2 or Vue 3 application
    Vue,
}

impl FrameworkKind {
    /// Returns true if the page is rendered client-side
    pub fn is_script_rendered(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for FrameworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "static",
            Self::React => "react",
            Self::Vue => "vue",
        };
        write!(f, "{}", name)
    }
}

/// How a rule compares its fingerprints against the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Byte-exact substring match
    Exact,
    /// Substring match after lower-casing both sides
    CaseInsensitive,
}

/// One detection rule: any fingerprint present selects `kind`
#[derive(Debug, Clone, Copy)]
pub struct FrameworkRule {
    pub kind: FrameworkKind,
    pub mode: MatchMode,
    pub fingerprints: &'static [&'static str],
}

impl FrameworkRule {
    fn matches(&self, html: &str, lowered: &str) -> bool {
        match self.mode {
            MatchMode::Exact => self.fingerprints.iter().any(|f| html.contains(f)),
            MatchMode::CaseInsensitive => self
                .fingerprints
                .iter()
                .any(|f| lowered.contains(&f.to_lowercase())),
        }
    }
}

/// Detection rules in priority order
pub const FRAMEWORK_RULES: &[FrameworkRule] = &[
    FrameworkRule {
        kind: FrameworkKind::Vue,
        mode: MatchMode::CaseInsensitive,
        fingerprints: &[
            // Vue 2
            "__vue__",
            "data-v-",
            "_v-",
            "vue.min.js",
            "vue.global.prod.js",
            // Vue 3
            "__vue_app__",
            "@vue/runtime-core",
            "runtime-dom",
            // common
            "vue.config",
            "vue-devtools",
            r#"id="app""#,
        ],
    },
    FrameworkRule {
        kind: FrameworkKind::React,
        mode: MatchMode::Exact,
        fingerprints: &[
            r#"id="root""#,
            "id='root'",
            "data-reactroot",
            "data-reactid",
            "data-react-root",
            "react",
        ],
    },
];

/// Classifies static HTML using [`FRAMEWORK_RULES`]
///
/// # Examples
///
/// ```
/// use contact_scout::extract::{detect_framework, FrameworkKind};
///
/// assert_eq!(detect_framework(r#"<div id="app" data-v-1a2b></div>"#), FrameworkKind::Vue);
/// assert_eq!(detect_framework(r#"<div id="root"></div>"#), FrameworkKind::React);
/// assert_eq!(detect_framework("<p>Hello</p>"), FrameworkKind::None);
/// ```
pub fn detect_framework(html: &str) -> FrameworkKind {
    detect_with_rules(html, FRAMEWORK_RULES)
}

/// Classifies HTML against an explicit rule list, first match wins
pub fn detect_with_rules(html: &str, rules: &[FrameworkRule]) -> FrameworkKind {
    let lowered = html.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(html, &lowered))
        .map(|rule| rule.kind)
        .unwrap_or_default()
}
