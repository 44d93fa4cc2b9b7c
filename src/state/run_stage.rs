/// Stage definitions for a per-site discovery run
///
/// A run moves strictly forward through these stages; no stage is revisited.
use std::fmt;

/// Represents the current stage of a site discovery run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RunStage {
    /// Run created, nothing fetched yet
    Pending,

    /// Static GET of the target, with one alternate-header retry
    Fetch,

    /// Framework detection on the static markup
    Classify,

    /// Contact zones and hyperlinks of the static markup
    StaticExtract,

    /// Sitemap discovery and about-page extraction
    SitemapExtract,

    /// Browser render when the page is script-driven
    DynamicPass,

    /// Fetch of well-known contact paths
    CommonPathProbe,

    /// Forced render when emails or phones are still missing
    FallbackGate,

    /// Removal of placeholder and asset emails
    Cleanup,

    /// FinalResult construction
    Assemble,

    /// Run finished; state is immutable
    Done,
}

impl RunStage {
    /// All stages in execution order
    pub const ORDER: [RunStage; 11] = [
        Self::Pending,
        Self::Fetch,
        Self::Classify,
        Self::StaticExtract,
        Self::SitemapExtract,
        Self::DynamicPass,
        Self::CommonPathProbe,
        Self::FallbackGate,
        Self::Cleanup,
        Self::Assemble,
        Self::Done,
    ];

    /// Returns true if a run may move from `self` to `next`
    ///
    /// Only forward moves are allowed.
    pub fn can_advance_to(&self, next: RunStage) -> bool {
        next > *self
    }

    /// Short lower-case name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetch => "fetch",
            Self::Classify => "classify",
            Self::StaticExtract => "static_extract",
            Self::SitemapExtract => "sitemap_extract",
            Self::DynamicPass => "dynamic_pass",
            Self::CommonPathProbe => "common_path_probe",
            Self::FallbackGate => "fallback_gate",
            Self::Cleanup => "cleanup",
            Self::Assemble => "assemble",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
