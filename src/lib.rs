//! Provision Azure Databricks service principals.
//!
//! [`api::ProvisioningClient`] adds a service principal to a workspace,
//! obtains its Azure AD token through the client-credentials flow, exchanges
//! that for a personal access token, and lists or removes principals, groups
//! and tokens. [`query::QueryExecutor`] runs SQL with the resulting
//! credential.

pub mod api;
pub mod auth;
pub mod config;
pub mod query;
