use httpmock::MockServer;
use iam_http_client::{
    BearerToken, Executor, QueryString, Request, TransportConfig, TransportExecutor,
};
use std::sync::Arc;

#[tokio::test]
async fn sends_headers_and_query_and_returns_normalized_response() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/users")
            .query_param("limit", "10")
            .header("x-custom", "value");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"ok":true}"#);
    });

    let executor = TransportExecutor::new(TransportConfig::default());
    let mut query = QueryString::new();
    query.push("limit", "10");
    let mut request = Request::get(server.url("/users"))
        .with_query(query)
        .with_header("x-custom", "value");

    let response = executor.execute(&mut request).await.unwrap();
    mock.assert();
    assert_eq!(response.status, 200);
    assert_eq!(response.content_type(), Some("application/json"));
    assert_eq!(response.text(), r#"{"ok":true}"#);
}

#[tokio::test]
async fn decodes_gzip_response_bodies() {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(b"hello world").unwrap();
    let compressed = encoder.finish().unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/gzipped");
        then.status(200)
            .header("content-encoding", "gzip")
            .body(compressed.clone());
    });

    let executor = TransportExecutor::new(TransportConfig::default());
    let mut request = Request::get(server.url("/gzipped"));
    let response = executor.execute(&mut request).await.unwrap();
    assert_eq!(response.text(), "hello world");
}

#[tokio::test]
async fn decodes_gzip_response_bodies_with_mixed_case_header() {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(b"hello world").unwrap();
    let compressed = encoder.finish().unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/gzipped-mixed-case");
        then.status(200)
            .header("content-encoding", "GZIP")
            .body(compressed.clone());
    });

    let executor = TransportExecutor::new(TransportConfig::default());
    let mut request = Request::get(server.url("/gzipped-mixed-case"));
    let response = executor.execute(&mut request).await.unwrap();
    assert_eq!(response.text(), "hello world");
}

#[tokio::test]
async fn bearer_token_authenticator_applied_before_send() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/secure")
            .header("authorization", "Bearer my-token");
        then.status(200);
    });

    let executor = TransportExecutor::with_authenticator(
        TransportConfig::default(),
        Arc::new(BearerToken::new("my-token")),
    );
    let mut request = Request::get(server.url("/secure"));
    executor.execute(&mut request).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn non_2xx_status_is_returned_not_errored() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/missing");
        then.status(404);
    });

    let executor = TransportExecutor::new(TransportConfig::default());
    let mut request = Request::get(server.url("/missing"));
    let response = executor.execute(&mut request).await.unwrap();
    assert_eq!(response.status, 404);
    assert!(!response.is_success());
}

#[tokio::test]
async fn retry_executor_composed_over_transport_exhausts_attempts_on_persistent_503() {
    use iam_http_client::{RetryConfig, RetryExecutor};
    use std::time::Duration;

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/flaky");
        then.status(503);
    });

    let transport = TransportExecutor::new(TransportConfig::default());
    let retry = RetryExecutor::new(
        transport,
        RetryConfig::builder()
            .max_attempts(2)
            .max_elapsed(Duration::from_secs(5))
            .build()
            .unwrap(),
    );
    let response = retry
        .execute(Request::get(server.url("/flaky")))
        .await
        .unwrap();
    assert_eq!(response.status, 503);
    mock.assert_hits(3);
}
