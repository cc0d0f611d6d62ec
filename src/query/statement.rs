use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{QueryExecutor, Row};
use crate::api::client::{decode, json_body};
use crate::api::constants;
use crate::api::{ApiError, ApiResult};

pub const DEFAULT_WAIT_TIMEOUT: &str = "30s";

/// Extract the warehouse id from a SQL warehouse HTTP path.
///
/// Accepts `/sql/1.0/warehouses/{id}`, the older `/sql/1.0/endpoints/{id}`,
/// or a bare id. Cluster paths are rejected since the statement API only
/// runs on warehouses.
pub fn warehouse_id(host_path: &str) -> ApiResult<&str> {
    let trimmed = host_path.trim().trim_matches('/');
    let segments: Vec<&str> = trimmed.split('/').collect();

    match segments.as_slice() {
        [id] if !id.is_empty() => Ok(*id),
        [.., kind, id] if (*kind == "warehouses" || *kind == "endpoints") && !id.is_empty() => {
            Ok(*id)
        }
        _ => Err(ApiError::InvalidHostPath(host_path.to_string())),
    }
}

#[derive(Debug, Serialize)]
struct ExecuteStatement<'a> {
    statement: &'a str,
    warehouse_id: &'a str,
    wait_timeout: &'a str,
    on_wait_timeout: &'static str,
    disposition: &'static str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct StatementResponse {
    statement_id: String,
    status: StatementStatus,
    #[serde(default)]
    result: Option<ResultChunk>,
}

#[derive(Debug, Deserialize)]
struct StatementStatus {
    state: String,
    #[serde(default)]
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ResultChunk {
    #[serde(default)]
    data_array: Vec<Row>,
    #[serde(default)]
    next_chunk_internal_link: Option<String>,
}

/// [`QueryExecutor`] backed by `POST /api/2.0/sql/statements`.
///
/// Statements run synchronously up to `wait_timeout` and are cancelled by
/// the server if still running after that, so each call ends in a terminal
/// state. Results are requested inline as JSON arrays; further chunks are
/// fetched one after another.
pub struct StatementExecutor {
    http: Client,
    host: String,
    wait_timeout: String,
}

impl StatementExecutor {
    pub fn new(http: Client, host: impl Into<String>) -> Self {
        Self {
            http,
            host: host.into(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT.to_string(),
        }
    }

    pub fn with_wait_timeout(mut self, wait_timeout: impl Into<String>) -> Self {
        self.wait_timeout = wait_timeout.into();
        self
    }

    async fn fetch_chunk(&self, link: &str, access_token: &str) -> ApiResult<ResultChunk> {
        let url = format!("{}{}", self.host.trim_end_matches('/'), link);
        debug!("Fetching result chunk {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let value = json_body("GET", &url, response).await?;
        decode(&url, value)
    }
}

#[async_trait]
impl QueryExecutor for StatementExecutor {
    async fn fetch_query(
        &self,
        host_path: &str,
        access_token: &str,
        query_text: &str,
    ) -> ApiResult<Vec<Row>> {
        let warehouse = warehouse_id(host_path)?;
        let url = constants::statements_endpoint(&self.host);
        info!("Executing statement on warehouse {}", warehouse);
        debug!("Statement: {}", query_text);

        let body = ExecuteStatement {
            statement: query_text,
            warehouse_id: warehouse,
            wait_timeout: &self.wait_timeout,
            on_wait_timeout: "CANCEL",
            disposition: "INLINE",
            format: "JSON_ARRAY",
        };
        let response = self
            .http
            .post(&url)
            .bearer_auth(access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let value = json_body("POST", &url, response).await?;
        let statement: StatementResponse = decode(&url, value)?;

        if statement.status.state != "SUCCEEDED" {
            let message = statement
                .status
                .error
                .map(|e| match (e.error_code, e.message) {
                    (Some(code), Some(message)) => format!("{}: {}", code, message),
                    (None, Some(message)) => message,
                    (Some(code), None) => code,
                    (None, None) => "no error details".to_string(),
                })
                .unwrap_or_else(|| "no error details".to_string());
            return Err(ApiError::QueryFailed {
                statement_id: statement.statement_id,
                state: statement.status.state,
                message,
            });
        }

        let mut chunk = statement.result.unwrap_or_default();
        let mut rows = std::mem::take(&mut chunk.data_array);
        while let Some(link) = chunk.next_chunk_internal_link.take() {
            chunk = self.fetch_chunk(&link, access_token).await?;
            rows.append(&mut chunk.data_array);
        }

        info!(
            "Statement {} returned {} rows",
            statement.statement_id,
            rows.len()
        );
        Ok(rows)
    }
}
