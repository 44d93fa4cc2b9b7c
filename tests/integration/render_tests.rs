//! Chromium renderer failure paths that need no installed browser

use crate::common::{html, test_fetcher};
use contact_scout::config::RendererConfig;
use contact_scout::crawler::SiteRun;
use contact_scout::output::ContactField;
use contact_scout::render::{ChromeRenderer, RenderError, Renderer};
use std::path::PathBuf;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

fn missing_browser() -> ChromeRenderer {
    ChromeRenderer::new(&RendererConfig {
        executable: Some(PathBuf::from("/nonexistent/contact-scout/chromium")),
        settle_ms: 0,
        ..RendererConfig::default()
    })
}

#[tokio::test]
async fn test_missing_browser_fails_session_start() {
    let result = missing_browser().render("https://college.edu.np/").await;
    assert!(matches!(result, Err(RenderError::Session(_))));
}

#[tokio::test]
async fn test_missing_browser_is_absorbed_by_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body><div id="root"></div><footer>Tel: 01-4261234</footer></body></html>"#,
        ))
        .mount(&server)
        .await;

    let result = SiteRun::new(&server.uri(), test_fetcher(), Arc::new(missing_browser()))
        .expect("Failed to create site run")
        .run()
        .await
        .expect("Site run failed");

    assert_eq!(result.emails, ContactField::NotFound);
    assert_eq!(
        result.numbers,
        ContactField::Found(vec!["014261234".to_string()])
    );
}
