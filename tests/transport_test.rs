use httpmock::prelude::*;
use knot_client::{CancellationToken, KnotClient, KnotError, TransportConfig};
use serde_json::json;
use std::time::{Duration, Instant};

fn client_for(server: &MockServer) -> KnotClient<knot_client::HttpTransport> {
    KnotClient::from_config(TransportConfig::new(server.base_url())).unwrap()
}

#[tokio::test]
async fn test_success_payload_is_passed_through() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/corporate/resolve")
            .header("content-type", "application/json")
            .json_body(json!({"company_name": "Acme Corp"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"company_id": "123"}));
    });

    let response = client_for(&server)
        .resolve_company("Acme Corp")
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(response.status, 200);
    assert_eq!(response.payload, json!({"company_id": "123"}));
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/health");
        then.status(503).body("stores offline");
    });

    let err = client_for(&server).health_check().await.unwrap_err();

    api_mock.assert();
    match err {
        KnotError::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "stores offline");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_not_found_is_http_status_not_router_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/patents/US999");
        then.status(404)
            .json_body(json!({"detail": "Patent US999 not found"}));
    });

    let err = client_for(&server).get_patent("US999").await.unwrap_err();
    assert!(matches!(err, KnotError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_timeout_is_distinct_from_server_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/health");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(json!({"status": "healthy"}));
    });

    let config = TransportConfig::new(server.base_url()).with_timeout_seconds(1);
    let client = KnotClient::from_config(config).unwrap();

    let started = Instant::now();
    let err = client.health_check().await.unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(3));
    match err {
        KnotError::Timeout {
            timeout_seconds, ..
        } => assert_eq!(timeout_seconds, 1),
        other => panic!("expected Timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = TransportConfig::new(format!("http://127.0.0.1:{}", port));
    let client = KnotClient::from_config(config).unwrap();

    let err = client.health_check().await.unwrap_err();
    assert!(matches!(err, KnotError::Transport(_)), "got {:?}", err);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_truncated_error_body_keeps_http_status() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // Announce a longer body than is sent, then hang up.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        socket
            .write_all(b"HTTP/1.1 502 Bad Gateway\r\nContent-Length: 200\r\n\r\npartial")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let config = TransportConfig::new(format!("http://127.0.0.1:{}", port));
    let client = KnotClient::from_config(config).unwrap();

    let err = client.health_check().await.unwrap_err();
    server.await.unwrap();

    match err {
        KnotError::HttpStatus { status, .. } => assert_eq!(status, 502),
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cancel_abandons_in_flight_call() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/query");
        then.status(200)
            .delay(Duration::from_secs(5))
            .json_body(json!({"executive_summary": "too late"}));
    });

    let token = CancellationToken::new();
    let client = client_for(&server).with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let started = Instant::now();
    let err = client.submit_query("superseded question").await.unwrap_err();
    canceller.await.unwrap();

    assert!(matches!(err, KnotError::Cancelled { .. }), "got {:?}", err);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/health");
        then.status(200).body("<html>proxy page</html>");
    });

    let err = client_for(&server).health_check().await.unwrap_err();
    assert!(matches!(err, KnotError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_custom_prefix_and_headers() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/knot/health")
            .header("x-client", "dashboard");
        then.status(200).json_body(json!({"status": "healthy"}));
    });

    let config = TransportConfig::new(server.base_url())
        .with_api_prefix("/knot")
        .with_header("X-Client", "dashboard");
    let client = KnotClient::from_config(config).unwrap();

    let response = client.health_check().await.unwrap();
    api_mock.assert();
    assert_eq!(response.payload["status"], "healthy");
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start();
    let health = server.mock(|when, then| {
        when.method(GET).path("/api/v1/health");
        then.status(200).json_body(json!({"status": "healthy"}));
    });
    let graph = server.mock(|when, then| {
        when.method(GET).path("/api/v1/corporate/graph/c-1");
        then.status(500).body("graph store down");
    });

    let client = client_for(&server);
    let (health_result, graph_result) =
        tokio::join!(client.health_check(), client.get_ownership_graph("c-1"));

    health.assert();
    graph.assert();
    assert!(health_result.is_ok());
    assert!(matches!(
        graph_result,
        Err(KnotError::HttpStatus { status: 500, .. })
    ));
}
