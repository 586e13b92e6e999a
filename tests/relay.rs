//! Relay behavior tests against a wiremock upstream.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use http_relay::config::RouteConfig;

mod common;

async fn wiremock_relay(server: &MockServer) -> (std::net::SocketAddr, http_relay::Shutdown) {
    let upstream = server.address();
    common::spawn_relay(common::relay_config(*upstream)).await
}

#[tokio::test]
async fn upstream_status_round_trips_unchanged() {
    let server = MockServer::start().await;
    for (route, status, body) in [
        ("/api/ok", 200, "all good"),
        ("/api/missing", 404, "nope"),
        ("/api/boom", 500, "exploded"),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
    }

    let (addr, shutdown) = wiremock_relay(&server).await;
    let client = common::http_client();

    for (route, status, body) in [
        ("/api/ok", 200, "all good"),
        ("/api/missing", 404, "nope"),
        ("/api/boom", 500, "exploded"),
    ] {
        let response = client
            .get(format!("http://{}{}", addr, route))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), status, "status for {}", route);
        assert_eq!(response.text().await.unwrap(), body, "body for {}", route);
    }

    shutdown.trigger();
}

#[tokio::test]
async fn unrouted_path_is_answered_locally() {
    let server = MockServer::start().await;

    let (addr, shutdown) = wiremock_relay(&server).await;
    let response = common::http_client()
        .get(format!("http://{}/other/path", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "route_not_found");

    // The upstream must observe zero interactions.
    assert!(server.received_requests().await.unwrap().is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn request_body_and_query_are_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/todos"))
        .and(body_json(json!({"description": "New Todo"})))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .mount(&server)
        .await;

    let (addr, shutdown) = wiremock_relay(&server).await;
    let response = common::http_client()
        .post(format!("http://{}/api/todos", addr))
        .json(&json!({"description": "New Todo"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    assert_eq!(response.text().await.unwrap(), "created");

    shutdown.trigger();
}

#[tokio::test]
async fn only_allow_listed_headers_reach_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ok"))
        .and(header("authorization", "Bearer token"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let (addr, shutdown) = wiremock_relay(&server).await;
    let response = common::http_client()
        .get(format!("http://{}/api/ok", addr))
        .header("authorization", "Bearer token")
        .header("x-internal-secret", "boo")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let seen = server.received_requests().await.unwrap();
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert!(request.headers.get("x-internal-secret").is_none());
    assert!(
        request.headers.get("x-request-id").is_some(),
        "request id must be propagated"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn method_constrained_route_rejects_other_methods() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let upstream = *server.address();
    let mut config = common::relay_config(upstream);
    config.routes.clear();
    config.routes.push(RouteConfig {
        name: "reads".into(),
        host: None,
        path_prefix: Some("/api".into()),
        methods: vec!["GET".into()],
        priority: 0,
    });

    let (addr, shutdown) = common::spawn_relay(config).await;
    let client = common::http_client();

    let ok = client
        .get(format!("http://{}/api/ok", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(ok.status(), 200);

    let rejected = client
        .post(format!("http://{}/api/ok", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), 404);
    let body: serde_json::Value = rejected.json().await.unwrap();
    assert_eq!(body["error"], "route_not_found");

    shutdown.trigger();
}
