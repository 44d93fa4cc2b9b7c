//! Dynamic renderer capability
//!
//! Script-driven pages carry no contact data in their static markup. A
//! [`Renderer`] loads a page in a real browser, waits for client-side
//! rendering to settle and hands back the live DOM. The discovery run only
//! sees this trait, so tests substitute a fake returning canned HTML.

#[cfg(feature = "browser")]
mod browser;

#[cfg(feature = "browser")]
pub use browser::ChromeRenderer;

use crate::config::RendererConfig;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Markup and anchors of a page after client-side rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    /// Serialized DOM after the settle delay
    pub html: String,
    /// Resolved `href` of every anchor in the live DOM
    pub anchors: Vec<String>,
}

/// Errors raised while rendering a page
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Renderer is disabled")]
    Disabled,

    #[error("Failed to start browser: {0}")]
    Session(String),

    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    #[error("Browser command failed: {0}")]
    Command(String),
}

/// A browser able to render a page
///
/// Implementations must release any browser session they open before
/// returning, on success and on every error path.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, url: &str) -> Result<RenderedPage, RenderError>;
}

/// Renderer used when rendering is switched off; every call fails with
/// [`RenderError::Disabled`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRenderer;

#[async_trait]
impl Renderer for DisabledRenderer {
    async fn render(&self, _url: &str) -> Result<RenderedPage, RenderError> {
        Err(RenderError::Disabled)
    }
}

/// Builds the renderer described by configuration
///
/// Without the `browser` feature every build is a [`DisabledRenderer`].
pub fn build_renderer(config: &RendererConfig) -> Arc<dyn Renderer> {
    if !config.enabled {
        tracing::info!("Dynamic rendering disabled");
        return Arc::new(DisabledRenderer);
    }

    #[cfg(feature = "browser")]
    {
        match &config.executable {
            Some(path) => tracing::info!("Dynamic rendering via {}", path.display()),
            None => tracing::info!("Dynamic rendering via the system Chromium"),
        }
        Arc::new(ChromeRenderer::new(config))
    }

    #[cfg(not(feature = "browser"))]
    {
        tracing::warn!("Built without the browser feature, dynamic rendering disabled");
        Arc::new(DisabledRenderer)
    }
}
