//! Integration tests for the entity store client using wiremock
//!
//! These tests verify request shapes and status handling against a mock
//! HTTP server.

use integration_entity_store::{
    EntityStoreClient, EntityStoreConfig, EntityStoreError, HttpEntityStoreClient,
};
use secrecy::SecretString;
use serde_json::{Map, Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

fn client_for(server: &MockServer) -> HttpEntityStoreClient {
    HttpEntityStoreClient::new(EntityStoreConfig {
        base_url: server.uri(),
        app_id: "app-1".to_string(),
        api_token: Some(SecretString::from("session-token")),
        timeout_secs: 5,
    })
    .expect("client")
}

fn sample_items() -> Value {
    json!([
        {"id": "c1", "title": "Apply for an ABN", "status": "pending", "priority": "critical"},
        {"id": "c2", "title": "Register for GST", "status": "completed", "priority": "high"}
    ])
}

#[tokio::test]
async fn list_sends_sort_and_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps/app-1/entities/LegalUpdate"))
        .and(query_param("sort", "-created_date"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "u1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let records = client_for(&server)
        .list("LegalUpdate", Some("-created_date"))
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], "u1");
}

#[tokio::test]
async fn list_without_sort() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps/app-1/entities/ComplianceItem"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_items()))
        .mount(&server)
        .await;

    let records = client_for(&server).list("ComplianceItem", None).await.unwrap();
    assert_eq!(records.len(), 2);

    let received = server.received_requests().await.unwrap();
    assert!(received[0].url.query().is_none());
}

#[tokio::test]
async fn filter_encodes_query_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps/app-1/entities/BusinessProfile"))
        .and(query_param("q", r#"{"created_by":"owner@example.com"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "p1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let mut query = Map::new();
    query.insert("created_by".to_string(), json!("owner@example.com"));
    let records = client_for(&server)
        .filter("BusinessProfile", &query)
        .await
        .unwrap();
    assert_eq!(records[0]["id"], "p1");
}

#[tokio::test]
async fn create_posts_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apps/app-1/entities/BusinessProfile"))
        .and(body_json(json!({"business_name": "Cafe"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "p9", "business_name": "Cafe"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .create("BusinessProfile", &json!({"business_name": "Cafe"}))
        .await
        .unwrap();
    assert_eq!(created["id"], "p9");
}

#[tokio::test]
async fn update_puts_to_record_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/apps/app-1/entities/ComplianceItem/c1"))
        .and(body_json(json!({"status": "completed"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "c1", "status": "completed"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .update("ComplianceItem", "c1", &json!({"status": "completed"}))
        .await
        .unwrap();
    assert_eq!(updated["status"], "completed");
}

#[tokio::test]
async fn me_returns_user() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps/app-1/entities/User/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-1",
            "email": "owner@example.com",
            "full_name": "Sam Owner"
        })))
        .mount(&server)
        .await;

    let user = client_for(&server).me().await.unwrap();
    assert_eq!(user.email, "owner@example.com");
    assert_eq!(user.full_name.as_deref(), Some("Sam Owner"));
}

#[tokio::test]
async fn unauthorized_and_forbidden_are_auth_failures() {
    for status in [401, 403] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apps/app-1/entities/User/me"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let err = client_for(&server).me().await.unwrap_err();
        assert!(err.is_auth_failure(), "status {status} gave {err:?}");
    }
}

#[tokio::test]
async fn not_found_on_update() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such record"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .update("ComplianceItem", "missing", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, EntityStoreError::NotFound(ref body) if body == "no such record"));
}

#[tokio::test]
async fn server_error_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).list("WarningItem", None).await.unwrap_err();
    assert!(matches!(err, EntityStoreError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server).list("WarningItem", None).await.unwrap_err();
    assert!(matches!(err, EntityStoreError::RateLimitExceeded));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).list("WarningItem", None).await.unwrap_err();
    assert!(matches!(err, EntityStoreError::ParseError(_)));
}
