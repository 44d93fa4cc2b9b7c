use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for Contact-Scout
///
/// Every section and key is optional; defaults reproduce the built-in
/// behavior, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub renderer: RendererConfig,
    pub batch: BatchConfig,
}

/// HTTP fetch behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Timeout of main, sitemap, about-page and hyperlink fetches (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Timeout of common-path probe fetches (seconds)
    #[serde(rename = "probe-timeout-secs")]
    pub probe_timeout_secs: u64,

    /// Maximum redirects followed per request
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            probe_timeout_secs: 3,
            max_redirects: 10,
        }
    }
}

/// Simulated client identities
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Identity used for every request
    pub primary: String,

    /// Identity used for the single retry of a failed main fetch
    pub alternate: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            primary: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                      (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36"
                .to_string(),
            alternate: "curl/8.0.1".to_string(),
        }
    }
}

/// Browser rendering through a locally launched Chromium
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Whether the dynamic pass may run at all
    pub enabled: bool,

    /// Chrome/Chromium binary; detected on the system when unset
    pub executable: Option<PathBuf>,

    pub headless: bool,

    /// Delay after navigation that lets client-side rendering finish (milliseconds)
    #[serde(rename = "settle-ms")]
    pub settle_ms: u64,
}

impl RendererConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            executable: None,
            headless: true,
            settle_ms: 5000,
        }
    }
}

/// Batch execution
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum number of sites processed at the same time
    #[serde(rename = "max-workers")]
    pub max_workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { max_workers: 12 }
    }
}
