// Integration tests for the crt.sh fetch path
//
// The endpoint is mocked with wiremock so the retry and parsing behavior
// can be verified without network access.

use std::collections::BTreeSet;
use std::time::Duration;
use subrecon::crtsh::{CrtshClient, CrtshConfig};
use subrecon::error::ScanError;
use wiremock::matchers::{header, headers, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer, retries: u32) -> CrtshConfig {
    CrtshConfig {
        retries,
        timeout: Duration::from_secs(5),
        retry_delay: Duration::from_millis(5),
        base_url: server.uri(),
    }
}

fn sample_body() -> serde_json::Value {
    serde_json::json!([
        {"name_value": "a.example.com\nb.example.com"},
        {"name_value": "c.other.com"}
    ])
}

#[tokio::test]
async fn test_fetch_filters_and_deduplicates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "%.example.com"))
        .and(query_param("output", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .mount(&server)
        .await;

    let client = CrtshClient::new(test_config(&server, 3)).unwrap();
    let subdomains = client.fetch("example.com").await.unwrap();

    let expected: BTreeSet<String> = ["a.example.com", "b.example.com"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(subdomains, expected);
}

#[tokio::test]
async fn test_fetch_sends_browser_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        // wiremock splits comma-separated header values, so comma-containing
        // expectations must use the multi-valued `headers` matcher
        .and(headers(
            "Accept",
            vec!["application/json", "text/javascript", "*/*; q=0.01"],
        ))
        .and(headers("Accept-Language", vec!["en-US", "en;q=0.9"]))
        .and(header(
            "Referer",
            format!("{}/?q=%.example.com", server.uri()).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .mount(&server)
        .await;

    let client = CrtshClient::new(test_config(&server, 1)).unwrap();
    // Without the headers no mock matches and the request 404s
    assert!(client.fetch("example.com").await.is_ok());
}

#[tokio::test]
async fn test_fetch_succeeds_after_transient_failures() {
    let server = MockServer::start().await;

    // First two attempts fail, the third succeeds
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .mount(&server)
        .await;

    let client = CrtshClient::new(test_config(&server, 3)).unwrap();
    let subdomains = client.fetch("example.com").await.unwrap();

    assert_eq!(subdomains.len(), 2);
    let attempts = server.received_requests().await.unwrap().len();
    assert_eq!(attempts, 3);
}

#[tokio::test]
async fn test_fetch_makes_exactly_retries_attempts_then_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = CrtshClient::new(test_config(&server, 3)).unwrap();
    let err = client.fetch("example.com").await.unwrap_err();

    assert!(matches!(
        err,
        ScanError::RetriesExhausted { attempts: 3, .. }
    ));
    let attempts = server.received_requests().await.unwrap().len();
    assert_eq!(attempts, 3);
}

#[tokio::test]
async fn test_malformed_json_is_retried_then_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = CrtshClient::new(test_config(&server, 2)).unwrap();
    let err = client.fetch("example.com").await.unwrap_err();

    assert!(matches!(
        err,
        ScanError::RetriesExhausted { attempts: 2, .. }
    ));
    let attempts = server.received_requests().await.unwrap().len();
    assert_eq!(attempts, 2);
}

#[tokio::test]
async fn test_empty_result_set_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = CrtshClient::new(test_config(&server, 3)).unwrap();
    let subdomains = client.fetch("example.com").await.unwrap();
    assert!(subdomains.is_empty());
}
