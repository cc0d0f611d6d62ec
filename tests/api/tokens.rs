use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use databricks_sp_cli::api::ApiError;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{TOKEN_PATH, client_for, mount_directory_token};

/// Test the directory token → PAT exchange end to end
#[tokio::test]
async fn test_pat_minted_with_directory_token() {
    let server = MockServer::start().await;
    mount_directory_token(&server, "tok1").await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/token/create"))
        .and(header("authorization", "Bearer tok1"))
        .and(body_json(json!({"comment": "Test Service Principal Token"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_value": "pat1",
            "token_info": {"token_id": "t-1", "comment": "Test Service Principal Token"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    assert_eq!(client.fetch_personal_access_token().await.unwrap(), "pat1");
}

/// Test that the client-credentials form carries the Databricks audience
#[tokio::test]
async fn test_directory_token_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=app-id"))
        .and(body_string_contains("client_secret=s3cret"))
        .and(body_string_contains("resource=2ff814a6-3304-4ab8-85cb-cd0e6f879c1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok1",
            "expires_in": "3599"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    assert_eq!(client.fetch_directory_token().await.unwrap(), "tok1");
    assert_eq!(client.ad_token(), Some("tok1"));
    assert_eq!(
        client.ad_token_response().and_then(|r| r.get("expires_in")),
        Some(&json!("3599"))
    );
}

/// Test that every fetch is a new request and the PAT call uses the newest token
#[tokio::test]
async fn test_pat_uses_freshest_directory_token() {
    let server = MockServer::start().await;
    let issued = Arc::new(AtomicUsize::new(0));
    let counter = issued.clone();

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(move |_req: &wiremock::Request| {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            ResponseTemplate::new(200).set_body_json(json!({"access_token": format!("tok{}", n)}))
        })
        .expect(3)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/token/create"))
        .and(header("authorization", "Bearer tok3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_value": "pat3"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    assert_eq!(client.fetch_directory_token().await.unwrap(), "tok1");
    assert_eq!(client.fetch_directory_token().await.unwrap(), "tok2");

    assert_eq!(client.fetch_personal_access_token().await.unwrap(), "pat3");
    assert_eq!(client.ad_token(), Some("tok3"));
    assert_eq!(issued.load(Ordering::SeqCst), 3);
}

/// Test that a rejected client-credentials grant is an authentication error
#[tokio::test]
async fn test_directory_token_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "AADSTS7000215: Invalid client secret provided."
        })))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.fetch_directory_token().await.unwrap_err();
    assert!(matches!(err, ApiError::Authentication { .. }), "got: {}", err);
    assert!(err.to_string().contains("invalid_client"), "got: {}", err);
    assert!(client.ad_token().is_none());
}

/// Test that a success response without access_token is an authentication error
#[tokio::test]
async fn test_directory_token_missing_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_type": "Bearer"})))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.fetch_directory_token().await.unwrap_err();
    assert!(matches!(err, ApiError::Authentication { .. }), "got: {}", err);
}

/// Test that a PAT response without token_value is an authentication error
#[tokio::test]
async fn test_pat_missing_token_value() {
    let server = MockServer::start().await;
    mount_directory_token(&server, "tok1").await;
    Mock::given(method("POST"))
        .and(path("/api/2.0/token/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_info": {}})))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.fetch_personal_access_token().await.unwrap_err();
    assert!(matches!(err, ApiError::Authentication { .. }), "got: {}", err);
}

/// Test that a principal without workspace access cannot mint a PAT
#[tokio::test]
async fn test_pat_rejected_by_workspace() {
    let server = MockServer::start().await;
    mount_directory_token(&server, "tok1").await;
    Mock::given(method("POST"))
        .and(path("/api/2.0/token/create"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error_code": "PERMISSION_DENIED",
            "message": "User is not authorized to create tokens"
        })))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.fetch_personal_access_token().await.unwrap_err();
    assert!(matches!(err, ApiError::Authentication { .. }), "got: {}", err);
    assert!(err.to_string().contains("PERMISSION_DENIED"), "got: {}", err);
}

/// Test that listing tokens fetches a directory token only when none is held
#[tokio::test]
async fn test_list_tokens_reuses_directory_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok1"})))
        .expect(1)
        .mount(&server)
        .await;

    let listing = json!({"token_infos": [
        {"token_id": "t-1", "creation_time": 1_700_000_000_000u64, "expiry_time": -1,
         "comment": "Test Service Principal Token"}
    ]});
    Mock::given(method("GET"))
        .and(path("/api/2.0/token/list"))
        .and(header("authorization", "Bearer tok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing.clone()))
        .expect(2)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    assert_eq!(client.list_personal_access_tokens().await.unwrap(), listing);
    assert_eq!(client.list_personal_access_tokens().await.unwrap(), listing);
}
