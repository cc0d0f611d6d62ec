use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client_for;

const GROUPS_PATH: &str = "/api/2.0/preview/scim/v2/Groups";

/// Test that group names map to ids and the later duplicate wins
#[tokio::test]
async fn test_group_mapping_last_duplicate_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GROUPS_PATH))
        .and(header("authorization", "Bearer admin-pat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalResults": 3,
            "Resources": [
                {"displayName": "admins", "id": "100"},
                {"displayName": "analysts", "id": "200"},
                {"displayName": "admins", "id": "300"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mapping = client.fetch_group_id_mapping("admin-pat").await.unwrap();

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.get("admins").map(String::as_str), Some("300"));
    assert_eq!(mapping.get("analysts").map(String::as_str), Some("200"));
}

/// Test that a workspace without groups yields an empty mapping
#[tokio::test]
async fn test_group_mapping_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GROUPS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalResults": 0})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.fetch_group_id_mapping("admin-pat").await.unwrap().is_empty());
}

/// Test that an unauthorized listing is surfaced with its status
#[tokio::test]
async fn test_group_mapping_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GROUPS_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_group_id_mapping("expired").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
}
