//! API Constants and Endpoint Builders for the Azure Databricks workspace API

/// Azure AD application id of the Azure Databricks service, used as the
/// `resource` (audience) of directory tokens
pub const AZURE_DATABRICKS_RESOURCE_ID: &str = "2ff814a6-3304-4ab8-85cb-cd0e6f879c1d";

/// Default Azure AD login host
pub const LOGIN_HOST: &str = "https://login.microsoftonline.com";

/// Domain suffix of Azure Databricks workspaces
pub const WORKSPACE_DOMAIN: &str = "azuredatabricks.net";

/// SCIM API base path
pub const SCIM_PATH: &str = "/api/2.0/preview/scim/v2";

/// SCIM schema URI for service principal resources
pub const SERVICE_PRINCIPAL_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:ServicePrincipal";

/// Entitlement granted to every principal created by this tool
pub const CLUSTER_CREATE_ENTITLEMENT: &str = "allow-cluster-create";

/// Comment attached to minted personal access tokens unless configured otherwise
pub const DEFAULT_PAT_COMMENT: &str = "Test Service Principal Token";

/// Standard headers for workspace requests
pub mod headers {
    /// Content type for SCIM request bodies
    pub const CONTENT_TYPE_SCIM: &str = "application/scim+json";

    /// Content type for form encoded token requests
    pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
}

/// Build the workspace host URL from a workspace id
pub fn workspace_host(workspace_id: &str) -> String {
    format!("https://{}.{}", workspace_id, WORKSPACE_DOMAIN)
}

/// Build the OAuth2 token endpoint for a tenant
pub fn token_endpoint(login_host: &str, tenant_id: &str) -> String {
    format!("{}/{}/oauth2/token", trim(login_host), tenant_id)
}

/// Build the service principal collection endpoint
pub fn service_principals_endpoint(host: &str) -> String {
    format!("{}{}/ServicePrincipals", trim(host), SCIM_PATH)
}

/// Build the endpoint for a single service principal
pub fn service_principal_endpoint(host: &str, id: &str) -> String {
    format!("{}/{}", service_principals_endpoint(host), id)
}

/// Build the group collection endpoint
pub fn groups_endpoint(host: &str) -> String {
    format!("{}{}/Groups", trim(host), SCIM_PATH)
}

/// Build the PAT creation endpoint
pub fn token_create_endpoint(host: &str) -> String {
    format!("{}/api/2.0/token/create", trim(host))
}

/// Build the PAT listing endpoint
pub fn token_list_endpoint(host: &str) -> String {
    format!("{}/api/2.0/token/list", trim(host))
}

/// Build the SQL statement execution endpoint
pub fn statements_endpoint(host: &str) -> String {
    format!("{}/api/2.0/sql/statements", trim(host))
}

fn trim(host: &str) -> &str {
    host.trim_end_matches('/')
}
