//! Shared helpers for the integration tests

use async_trait::async_trait;
use contact_scout::config::Config;
use contact_scout::crawler::Fetcher;
use contact_scout::render::{RenderError, RenderedPage, Renderer};
use std::sync::Mutex;
use wiremock::ResponseTemplate;

/// Renderer returning canned markup and recording every call
pub struct FakeRenderer {
    page: Option<RenderedPage>,
    calls: Mutex<Vec<String>>,
}

impl FakeRenderer {
    /// Renders every URL as `html` with the given anchors
    pub fn returning(html: &str, anchors: &[&str]) -> Self {
        Self {
            page: Some(RenderedPage {
                html: html.to_string(),
                anchors: anchors.iter().map(|a| a.to_string()).collect(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Renders every URL as an empty document
    pub fn empty() -> Self {
        Self::returning("<html><body></body></html>", &[])
    }

    /// Fails every render
    pub fn failing() -> Self {
        Self {
            page: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Renderer for FakeRenderer {
    async fn render(&self, url: &str) -> Result<RenderedPage, RenderError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.page
            .clone()
            .ok_or_else(|| RenderError::Command("browser crashed".to_string()))
    }
}

/// Default configuration with short timeouts
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.fetch.timeout_secs = 2;
    config.fetch.probe_timeout_secs = 1;
    config.batch.max_workers = 2;
    config
}

pub fn test_fetcher() -> Fetcher {
    let config = test_config();
    Fetcher::new(&config.fetch, &config.user_agent).expect("Failed to build fetcher")
}

/// A 200 HTML response
pub fn html(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.into())
        .insert_header("content-type", "text/html")
}

/// A port on localhost that refuses connections
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    listener.local_addr().expect("No local address").port()
}
