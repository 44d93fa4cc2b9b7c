//! Chromium renderer over the DevTools protocol
//!
//! Every render launches its own browser, loads the page, waits for
//! client-side rendering to settle and closes the browser before the call
//! returns. The protocol handler runs on a tokio task for the browser's
//! lifetime.

use crate::config::RendererConfig;
use crate::render::{RenderError, RenderedPage, Renderer};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Upper bound for a single DevTools request, navigation included
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Collects the resolved href of every anchor in the live DOM
const ANCHOR_SCRIPT: &str = "Array.from(document.querySelectorAll('a')).map(a => a.href)";

/// Renderer backed by a locally launched Chrome or Chromium
#[derive(Debug, Clone)]
pub struct ChromeRenderer {
    executable: Option<PathBuf>,
    headless: bool,
    settle_delay: Duration,
}

impl ChromeRenderer {
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            executable: config.executable.clone(),
            headless: config.headless,
            settle_delay: config.settle_delay(),
        }
    }

    /// Launch settings; fails when no executable is configured or detected
    fn browser_config(&self) -> Result<BrowserConfig, RenderError> {
        let mut builder = BrowserConfig::builder().request_timeout(REQUEST_TIMEOUT);
        if !self.headless {
            builder = builder.with_head();
        }
        if let Some(executable) = &self.executable {
            builder = builder.chrome_executable(executable);
        }
        builder.build().map_err(RenderError::Session)
    }

    /// Navigates, waits for the page to settle and reads back the DOM
    async fn drive(&self, browser: &Browser, url: &str) -> Result<RenderedPage, RenderError> {
        let navigation = |e: chromiumoxide::error::CdpError| RenderError::Navigation {
            url: url.to_string(),
            message: e.to_string(),
        };

        let page = browser.new_page(url).await.map_err(navigation)?;
        page.wait_for_navigation().await.map_err(navigation)?;

        tokio::time::sleep(self.settle_delay).await;

        let html = page
            .content()
            .await
            .map_err(|e| RenderError::Command(e.to_string()))?;

        let hrefs: Vec<String> = page
            .evaluate(ANCHOR_SCRIPT)
            .await
            .map_err(|e| RenderError::Command(e.to_string()))?
            .into_value()
            .map_err(|e| RenderError::Command(e.to_string()))?;

        Ok(RenderedPage {
            html,
            anchors: non_empty(hrefs),
        })
    }
}

#[async_trait]
impl Renderer for ChromeRenderer {
    async fn render(&self, url: &str) -> Result<RenderedPage, RenderError> {
        let (mut browser, mut handler) = Browser::launch(self.browser_config()?)
            .await
            .map_err(|e| RenderError::Session(e.to_string()))?;

        let events = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });
        tracing::debug!("Browser launched to render {}", url);

        let outcome = self.drive(&browser, url).await;
        release(&mut browser, events).await;
        outcome
    }
}

/// Closes the browser and stops its handler task; failures are only logged
async fn release(browser: &mut Browser, events: JoinHandle<()>) {
    if let Err(e) = browser.close().await {
        tracing::warn!("Failed to close browser: {}", e);
    }
    if let Err(e) = browser.wait().await {
        tracing::warn!("Browser process did not exit cleanly: {}", e);
    }
    events.abort();
}

/// Drops anchors without an href
fn non_empty(hrefs: Vec<String>) -> Vec<String> {
    hrefs.into_iter().filter(|href| !href.is_empty()).collect()
}
