//! Batch runs over several mock websites

use crate::common::{closed_port, html, test_config, FakeRenderer};
use contact_scout::crawler::{run_batch, BatchRunner};
use contact_scout::output::{ContactField, FinalResult};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

async fn contact_site(email: &str, phone: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(format!(
            "<html><body><footer>Email: {} Phone: {}</footer></body></html>",
            email, phone
        )))
        .mount(&server)
        .await;
    server
}

fn result_for<'a>(results: &'a [FinalResult], website: &str) -> &'a FinalResult {
    results
        .iter()
        .find(|r| r.website == website)
        .unwrap_or_else(|| panic!("No result for {}", website))
}

#[tokio::test]
async fn test_batch_isolates_failed_site() {
    let first = contact_site("info@first.edu.np", "061-531234").await;
    let third = contact_site("office@third.com.np", "9841234567").await;
    let unreachable = format!("http://127.0.0.1:{}", closed_port());

    let urls = vec![first.uri(), unreachable.clone(), third.uri()];
    let results = run_batch(&test_config(), Arc::new(FakeRenderer::empty()), urls)
        .await
        .expect("Failed to run batch");

    assert_eq!(results.len(), 3);

    let failed = result_for(&results, &unreachable);
    assert_eq!(failed.emails, ContactField::Error);
    assert_eq!(failed.numbers, ContactField::Error);

    let first_result = result_for(&results, &first.uri());
    assert_eq!(
        first_result.emails,
        ContactField::Found(vec!["info@first.edu.np".to_string()])
    );
    assert_eq!(
        first_result.numbers,
        ContactField::Found(vec!["061531234".to_string()])
    );

    let third_result = result_for(&results, &third.uri());
    assert_eq!(
        third_result.numbers,
        ContactField::Found(vec!["9841234567".to_string()])
    );
}

#[tokio::test]
async fn test_batch_serializes_error_marker() {
    let unreachable = format!("http://127.0.0.1:{}", closed_port());

    let results = run_batch(
        &test_config(),
        Arc::new(FakeRenderer::empty()),
        vec![unreachable.clone()],
    )
    .await
    .expect("Failed to run batch");

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "website": unreachable, "emails": "Error", "numbers": "Error" }])
    );
}

#[tokio::test]
async fn test_single_worker_processes_every_site() {
    let a = contact_site("a@alpha.edu.np", "01-4261234").await;
    let b = contact_site("b@beta.edu.np", "021-525252").await;

    let mut config = test_config();
    config.batch.max_workers = 1;
    let runner = BatchRunner::new(&config, Arc::new(FakeRenderer::empty())).unwrap();

    let results = runner.run(vec![a.uri(), b.uri()]).await;

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| !r.is_error()));
    assert_eq!(
        result_for(&results, &b.uri()).numbers,
        ContactField::Found(vec!["021525252".to_string()])
    );
}
