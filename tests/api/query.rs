use databricks_sp_cli::api::ApiError;
use databricks_sp_cli::query::{QueryExecutor, StatementExecutor};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{client_for, mount_directory_token};

const STATEMENTS_PATH: &str = "/api/2.0/sql/statements";

fn executor(server: &MockServer) -> StatementExecutor {
    StatementExecutor::new(reqwest::Client::new(), server.uri()).with_wait_timeout("10s")
}

/// Test that every result chunk is fetched and rows keep their order
#[tokio::test]
async fn test_fetch_query_follows_chunks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STATEMENTS_PATH))
        .and(header("authorization", "Bearer pat1"))
        .and(body_partial_json(json!({
            "statement": "SHOW DATABASES",
            "warehouse_id": "abc123",
            "wait_timeout": "10s",
            "disposition": "INLINE",
            "format": "JSON_ARRAY"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statement_id": "st-1",
            "status": {"state": "SUCCEEDED"},
            "manifest": {"schema": {"column_count": 1}},
            "result": {
                "chunk_index": 0,
                "data_array": [["default"], ["analytics"]],
                "next_chunk_index": 1,
                "next_chunk_internal_link": "/api/2.0/sql/statements/st-1/result/chunks/1"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/2.0/sql/statements/st-1/result/chunks/1"))
        .and(header("authorization", "Bearer pat1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chunk_index": 1,
            "data_array": [["raw"]]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let rows = executor(&server)
        .fetch_query("/sql/1.0/warehouses/abc123", "pat1", "SHOW DATABASES")
        .await
        .unwrap();

    assert_eq!(
        rows,
        vec![vec![json!("default")], vec![json!("analytics")], vec![json!("raw")]]
    );
}

/// Test that a failed statement reports its state and server message
#[tokio::test]
async fn test_fetch_query_failed_statement() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STATEMENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statement_id": "st-2",
            "status": {
                "state": "FAILED",
                "error": {"error_code": "BAD_REQUEST", "message": "Table or view not found: nope"}
            }
        })))
        .mount(&server)
        .await;

    let err = executor(&server)
        .fetch_query("abc123", "pat1", "SELECT * FROM nope")
        .await
        .unwrap_err();

    match err {
        ApiError::QueryFailed {
            statement_id,
            state,
            message,
        } => {
            assert_eq!(statement_id, "st-2");
            assert_eq!(state, "FAILED");
            assert!(message.contains("Table or view not found"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

/// Test that a statement without rows returns an empty result
#[tokio::test]
async fn test_fetch_query_no_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STATEMENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statement_id": "st-3",
            "status": {"state": "SUCCEEDED"}
        })))
        .mount(&server)
        .await;

    let rows = executor(&server)
        .fetch_query("abc123", "pat1", "CREATE SCHEMA IF NOT EXISTS x")
        .await
        .unwrap();
    assert!(rows.is_empty());
}

/// Test that a cluster path is rejected before any request is made
#[tokio::test]
async fn test_fetch_query_rejects_cluster_path() {
    let server = MockServer::start().await;

    let err = executor(&server)
        .fetch_query("sql/protocolv1/o/7844645611/000-245641-bari376", "pat1", "SELECT 1")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidHostPath(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// Test that a statement can run on the directory token without minting a PAT
#[tokio::test]
async fn test_fetch_query_with_directory_token() {
    let server = MockServer::start().await;
    mount_directory_token(&server, "tok1").await;
    Mock::given(method("POST"))
        .and(path("/api/2.0/token/create"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(STATEMENTS_PATH))
        .and(header("authorization", "Bearer tok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statement_id": "st-3",
            "status": {"state": "SUCCEEDED"},
            "result": {"data_array": [["1"]]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let token = client.fetch_directory_token().await.unwrap();
    let executor = StatementExecutor::new(client.http_client(), client.config().host());

    let rows = executor
        .fetch_query("/sql/1.0/warehouses/abc123", &token, "SELECT 1")
        .await
        .unwrap();
    assert_eq!(rows, vec![vec![json!("1")]]);
}
