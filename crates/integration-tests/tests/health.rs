mod harness;

use axum::Router;
use harness::config::ConfigBuilder;
use harness::server::TestServer;
use serde_json::Value;

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = TestServer::start(ConfigBuilder::new().build(), Router::new()).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn health_endpoint_disabled() {
    let config = ConfigBuilder::new().without_health().build();
    let server = TestServer::start(config, Router::new()).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn status_map_endpoint_lists_table() {
    let config = ConfigBuilder::new().with_status_map_endpoint().build();
    let server = TestServer::start(config, Router::new()).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/_caffeine/status-codes"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["domain"]["InvalidDomainDataException"], 400);
    assert_eq!(body["application"]["ResourceNotFoundException"], 404);
    assert_eq!(body["infra"]["ResourceNotFoundException"], 404);
    assert_eq!(body["infra"]["MissingPluginDependencyException"], 503);
}
