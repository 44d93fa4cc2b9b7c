//! End-to-end site discovery runs against mock websites

use crate::common::{html, test_fetcher, FakeRenderer};
use contact_scout::crawler::SiteRun;
use contact_scout::output::{ContactField, FinalResult};
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn found(values: &[&str]) -> ContactField {
    ContactField::Found(values.iter().map(|v| v.to_string()).collect())
}

async fn run_site(url: &str, renderer: Arc<FakeRenderer>) -> FinalResult {
    SiteRun::new(url, test_fetcher(), renderer)
        .expect("Failed to create site run")
        .run()
        .await
        .expect("Site run failed")
}

#[tokio::test]
async fn test_footer_phone_without_sitemap() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body>
            <h1>Welcome to Lakeside School</h1>
            <div>Admissions open for 2081</div>
            <footer>Call: 061-531234</footer>
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    let renderer = Arc::new(FakeRenderer::empty());
    let result = run_site(&server.uri(), renderer.clone()).await;

    assert_eq!(result.website, server.uri());
    assert_eq!(result.numbers, found(&["061531234"]));
    assert_eq!(result.emails, ContactField::NotFound);

    // No email was found statically, so the fallback render ran once
    assert_eq!(renderer.calls().len(), 1);
}

#[tokio::test]
async fn test_vue_page_gets_dynamic_pass() {
    let server = MockServer::start().await;

    // Both Vue and generic root-mount markers; Vue must win
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><head><script src="/js/vue.global.prod.js"></script></head>
            <body><div id="app"></div><div id="root" data-reactroot></div></body></html>"#,
        ))
        .mount(&server)
        .await;

    let renderer = Arc::new(FakeRenderer::returning(
        r#"<html><body><div id="app" data-v-7ba5bd90>
            <section>Contact: office@college.edu.np</section>
            <footer>Phone: 01-4261234</footer>
        </div></body></html>"#,
        &["mailto:Admin@College.edu.np?subject=Admission", "tel:9841234567"],
    ));
    let result = run_site(&server.uri(), renderer.clone()).await;

    assert_eq!(
        result.emails,
        found(&["admin@college.edu.np", "office@college.edu.np"])
    );
    assert_eq!(result.numbers, found(&["014261234", "9841234567"]));

    // Dynamic pass only; the fallback gate has nothing left to do
    let calls = renderer.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with(&server.uri()));
}

#[tokio::test]
async fn test_sitemap_about_pages_are_extracted() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("<html><body><h1>Home</h1></body></html>"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<?xml version="1.0"?>
            <urlset>
              <url><loc>{base}/</loc></url>
              <url><loc>{base}/about-us</loc></url>
              <url><loc>https://partner-site.com/contact</loc></url>
            </urlset>"#
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/about-us"))
        .respond_with(html(
            r#"<html><body><div>Contact: info@college.edu.np, 9841234567</div></body></html>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let renderer = Arc::new(FakeRenderer::empty());
    let result = run_site(&base, renderer.clone()).await;

    assert_eq!(result.emails, found(&["info@college.edu.np"]));
    assert_eq!(result.numbers, found(&["9841234567"]));
    assert!(renderer.calls().is_empty());
}

#[tokio::test]
async fn test_contact_hyperlink_followed_once() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(format!(
            r#"<html><body>
            <nav>
              <a href="{base}/contact-page">Contact us</a>
              <a href="{base}/contact-page">Reach us</a>
              <a href="{base}/programs">Programs</a>
            </nav>
            </body></html>"#
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contact-page"))
        .respond_with(html(
            r#"<html><body><footer>Email: principal@school.edu.np Phone: 021-525252</footer></body></html>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/programs"))
        .respond_with(html("<html><body>Programs</body></html>"))
        .expect(0)
        .mount(&server)
        .await;

    let renderer = Arc::new(FakeRenderer::empty());
    let result = run_site(&base, renderer.clone()).await;

    assert_eq!(result.emails, found(&["principal@school.edu.np"]));
    assert_eq!(result.numbers, found(&["021525252"]));
    assert!(renderer.calls().is_empty());
}

#[tokio::test]
async fn test_forbidden_page_retried_with_alternate_headers() {
    let server = MockServer::start().await;

    // Mounted first so it wins over the catch-all below
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "curl/8.0.1"))
        .respond_with(html(
            r#"<html><body><footer>Email: info@college.edu.np Tel: 01-4261234</footer></body></html>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .expect(1)
        .mount(&server)
        .await;

    let renderer = Arc::new(FakeRenderer::empty());
    let result = run_site(&server.uri(), renderer).await;

    assert_eq!(result.emails, found(&["info@college.edu.np"]));
    assert_eq!(result.numbers, found(&["014261234"]));
}

#[tokio::test]
async fn test_soft_404_content_is_still_extracted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"<html><body><footer>Contact: help@store.com.np, 9801234567</footer></body></html>"#,
        ))
        .expect(2)
        .mount(&server)
        .await;

    let renderer = Arc::new(FakeRenderer::empty());
    let result = run_site(&server.uri(), renderer).await;

    assert_eq!(result.emails, found(&["help@store.com.np"]));
    assert_eq!(result.numbers, found(&["9801234567"]));
}

#[tokio::test]
async fn test_placeholder_emails_removed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body>
            <img src="/img/logo@2x.png">
            <footer>Email: you@yoursite.com, principal@school.edu.np Phone: 061-531234</footer>
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    let renderer = Arc::new(FakeRenderer::empty());
    let result = run_site(&server.uri(), renderer).await;

    assert_eq!(result.emails, found(&["principal@school.edu.np"]));
    assert_eq!(result.numbers, found(&["061531234"]));
}

#[tokio::test]
async fn test_common_contact_path_probed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("<html><body><h1>Home</h1></body></html>"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contact-us"))
        .respond_with(html(
            r#"<html><body><p>Phone: 01-5550123</p><a href="mailto:desk@hotel.com.np">Mail us</a></body></html>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let renderer = Arc::new(FakeRenderer::empty());
    let result = run_site(&server.uri(), renderer.clone()).await;

    assert_eq!(result.emails, found(&["desk@hotel.com.np"]));
    assert_eq!(result.numbers, found(&["015550123"]));
    assert!(renderer.calls().is_empty());
}

#[tokio::test]
async fn test_render_failure_is_absorbed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<html><body><div id="root"></div></body></html>"#))
        .mount(&server)
        .await;

    let renderer = Arc::new(FakeRenderer::failing());
    let result = run_site(&server.uri(), renderer.clone()).await;

    assert_eq!(result.emails, ContactField::NotFound);
    assert_eq!(result.numbers, ContactField::NotFound);
    assert!(!result.is_error());

    // The fallback gate renders again after the failed dynamic pass
    assert_eq!(renderer.calls().len(), 2);
}

#[tokio::test]
async fn test_incomplete_vue_page_rendered_again_at_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body><div id="app" data-v-1></div></body></html>"#,
        ))
        .mount(&server)
        .await;

    let renderer = Arc::new(FakeRenderer::empty());
    let result = run_site(&server.uri(), renderer.clone()).await;

    assert_eq!(result.emails, ContactField::NotFound);
    assert_eq!(result.numbers, ContactField::NotFound);
    assert_eq!(renderer.calls().len(), 2);
}

#[tokio::test]
async fn test_bare_sitemap_path_used_when_xml_missing() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("<html><body><h1>Home</h1></body></html>"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sitemap"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<ul><li><a href="{base}/about">About</a></li></ul>"#
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(html(
            r#"<html><body><div>Email: office@trek.com.np, 01-4411223</div></body></html>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let renderer = Arc::new(FakeRenderer::empty());
    let result = run_site(&base, renderer.clone()).await;

    assert_eq!(result.emails, found(&["office@trek.com.np"]));
    assert_eq!(result.numbers, found(&["014411223"]));
    assert!(renderer.calls().is_empty());
}

#[tokio::test]
async fn test_invalid_tel_link_dropped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body>
            <a href="tel:12">Call</a>
            <a href="tel:+977-1-4261234">Office</a>
            <a href="mailto:info@college.edu.np">Mail</a>
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    let renderer = Arc::new(FakeRenderer::empty());
    let result = run_site(&server.uri(), renderer.clone()).await;

    assert_eq!(result.emails, found(&["info@college.edu.np"]));
    assert_eq!(result.numbers, found(&["014261234"]));
    assert!(renderer.calls().is_empty());
}
