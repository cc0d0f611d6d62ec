//! Azure Databricks workspace and Azure AD API client
//!
//! Covers the calls needed to provision a service principal: SCIM principal
//! and group management, the client-credentials token exchange, and the
//! personal access token API.

pub mod auth;
pub mod client;
pub mod constants;
pub mod error;
pub mod models;

pub use client::{ProvisioningClient, build_http_client};
pub use error::{ApiError, ApiResult};
pub use models::{ClientConfig, DirectoryToken, Group, ScimListResponse, ScimValue, ServicePrincipal};
