//! Query execution against the workspace's SQL engine
//!
//! The provisioning flow ends by proving the minted credential works: one
//! statement is executed with it and all rows are fetched. [`QueryExecutor`]
//! is the seam for that capability; [`StatementExecutor`] implements it over
//! the SQL Statement Execution API.

pub mod statement;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::ApiResult;

pub use statement::{StatementExecutor, warehouse_id};

/// One result row, columns in select-list order
pub type Row = Vec<Value>;

#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Open a short-lived session on `host_path`, run `query_text` with
    /// `access_token`, and return every row.
    async fn fetch_query(
        &self,
        host_path: &str,
        access_token: &str,
        query_text: &str,
    ) -> ApiResult<Vec<Row>>;
}
