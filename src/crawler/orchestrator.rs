//! Per-site discovery run
//!
//! A [`SiteRun`] owns the `ExtractionState` of one website and drives it
//! through the fixed stage sequence of [`RunStage`]:
//! - Fetch the target (one alternate-header retry)
//! - Classify the framework and extract the static markup
//! - Extract the sitemap's about/contact pages
//! - Render script-driven pages
//! - Probe well-known contact paths
//! - Render once more when emails or phones are still missing
//! - Drop placeholder emails and assemble the `FinalResult`
//!
//! Every step runs sequentially. Failed fetches and renders contribute no
//! data and never abort the run.

use crate::crawler::fetcher::Fetcher;
use crate::crawler::links::crawl_links;
use crate::crawler::sitemap::discover_about_pages;
use crate::extract::patterns::COMMON_PATHS;
use crate::extract::{detect_framework, extract_page, harvest_hrefs};
use crate::output::FinalResult;
use crate::render::{RenderError, Renderer};
use crate::state::{ExtractionState, RunStage};
use crate::url::ScrapeTarget;
use crate::{Result, ScoutError};
use std::sync::Arc;

/// One website's discovery run
pub struct SiteRun {
    website: String,
    target: ScrapeTarget,
    fetcher: Fetcher,
    renderer: Arc<dyn Renderer>,
    state: ExtractionState,
    stage: RunStage,
}

impl SiteRun {
    /// Creates a run for a seed URL
    ///
    /// # Returns
    ///
    /// * `Ok(SiteRun)` - Run ready to start
    /// * `Err(ScoutError)` - The URL is not an absolute http(s) URL
    pub fn new(website: &str, fetcher: Fetcher, renderer: Arc<dyn Renderer>) -> Result<Self> {
        let website = website.trim().to_string();
        let target = ScrapeTarget::parse(&website)?;

        Ok(Self {
            website,
            target,
            fetcher,
            renderer,
            state: ExtractionState::new(),
            stage: RunStage::Pending,
        })
    }

    pub fn stage(&self) -> RunStage {
        self.stage
    }

    pub fn target(&self) -> &ScrapeTarget {
        &self.target
    }

    /// Runs every stage and assembles the result
    ///
    /// Only a network-level failure of the initial fetch ends the run
    /// early; every later failure is absorbed.
    pub async fn run(mut self) -> Result<FinalResult> {
        tracing::info!("Scraping {}", self.website);

        self.advance(RunStage::Fetch)?;
        let page = self
            .fetcher
            .fetch_main(self.target.url().as_str())
            .await?;
        if !page.succeeded {
            // Soft-404 pages still carry content
            tracing::warn!("{} returned {}", self.website, page.status_code);
        }

        self.advance(RunStage::Classify)?;
        let framework = detect_framework(&page.html);
        self.state.record_framework(framework);
        if framework.is_script_rendered() {
            tracing::info!("{} detected on {}", framework, self.website);
        }

        self.advance(RunStage::StaticExtract)?;
        let report = extract_page(&page.html, &mut self.state);
        tracing::debug!(
            "{}: {} zones, {} emails, {} phones in static markup",
            self.website,
            report.zones,
            report.emails,
            report.phones
        );
        crawl_links(&self.fetcher, &page.html, &self.target, &mut self.state).await;

        self.advance(RunStage::SitemapExtract)?;
        self.extract_sitemap_pages().await;

        self.advance(RunStage::DynamicPass)?;
        if self.state.framework().is_script_rendered() {
            self.dynamic_pass().await;
        }

        self.advance(RunStage::CommonPathProbe)?;
        self.probe_common_paths().await;

        self.advance(RunStage::FallbackGate)?;
        if self.state.is_incomplete() {
            tracing::info!(
                "Static scraping of {} incomplete, trying dynamic rendering",
                self.website
            );
            self.dynamic_pass().await;
        }

        self.advance(RunStage::Cleanup)?;
        let removed = self.state.remove_gibberish_emails();
        if removed > 0 {
            tracing::debug!("Removed {} placeholder emails", removed);
        }

        self.advance(RunStage::Assemble)?;
        let state = std::mem::take(&mut self.state);
        let result = FinalResult::from_state(&self.website, state);

        self.advance(RunStage::Done)?;
        tracing::info!(
            "Finished {}: {} emails, {} phones",
            self.website,
            result.emails.values().len(),
            result.numbers.values().len()
        );
        Ok(result)
    }

    /// Moves the run forward, rejecting any backward or repeated stage
    fn advance(&mut self, next: RunStage) -> Result<()> {
        if !self.stage.can_advance_to(next) {
            return Err(ScoutError::InvalidTransition {
                from: self.stage,
                to: next,
            });
        }
        tracing::trace!("{}: {} -> {}", self.website, self.stage, next);
        self.stage = next;
        Ok(())
    }

    /// Discovers about pages through the sitemap and extracts each of them
    async fn extract_sitemap_pages(&mut self) {
        discover_about_pages(&self.fetcher, &self.target, &mut self.state).await;
        if !self.state.has_sitemap() {
            return;
        }

        let pages: Vec<String> = self.state.about_pages().iter().cloned().collect();
        for page_url in pages {
            match self.fetcher.fetch(&page_url).await {
                Ok(page) if page.succeeded => {
                    extract_page(&page.html, &mut self.state);
                }
                Ok(page) => tracing::warn!("{} returned {}", page_url, page.status_code),
                Err(e) => tracing::warn!("Failed to fetch {}: {}", page_url, e),
            }
        }
    }

    /// Renders the target and extracts the live DOM
    ///
    /// Runs for script-rendered pages and again at the fallback gate while
    /// emails or phones are missing, even when the first render failed.
    async fn dynamic_pass(&mut self) {
        match self.renderer.render(self.target.url().as_str()).await {
            Ok(page) => {
                extract_page(&page.html, &mut self.state);
                harvest_hrefs(page.anchors.iter().map(String::as_str), &mut self.state);
                crawl_links(&self.fetcher, &page.html, &self.target, &mut self.state).await;
            }
            Err(RenderError::Disabled) => {
                tracing::debug!("Skipping dynamic pass of {}", self.website);
            }
            Err(e) => tracing::warn!("Rendering {} failed: {}", self.website, e),
        }
    }

    /// Fetches well-known contact paths with the short probe timeout
    async fn probe_common_paths(&mut self) {
        for path in COMMON_PATHS {
            let probe_url = self.target.join_path(path);
            tracing::debug!("Checking {}", probe_url);

            match self.fetcher.probe(&probe_url).await {
                Ok(page) if page.succeeded => {
                    extract_page(&page.html, &mut self.state);
                    crawl_links(&self.fetcher, &page.html, &self.target, &mut self.state).await;
                }
                Ok(page) => tracing::debug!("{} returned {}", probe_url, page.status_code),
                Err(e) => tracing::debug!("Failed to fetch {}: {}", probe_url, e),
            }
        }
    }
}

/// Runs discovery for one site, turning a failed run into an error result
pub async fn discover_site(
    website: &str,
    fetcher: Fetcher,
    renderer: Arc<dyn Renderer>,
) -> FinalResult {
    let outcome = match SiteRun::new(website, fetcher, renderer) {
        Ok(run) => run.run().await,
        Err(e) => Err(e),
    };

    outcome.unwrap_or_else(|e| {
        tracing::error!("Site run for {} failed: {}", website, e);
        FinalResult::error(website.trim())
    })
}
