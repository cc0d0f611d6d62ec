use std::collections::HashMap;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use super::auth::request_directory_token;
use super::constants::{self, headers};
use super::error::{ApiError, ApiResult};
use super::models::{
    ClientConfig, CreateServicePrincipal, CreateToken, DirectoryToken, Group, ScimListResponse,
    ServicePrincipal,
};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the HTTP client shared by every call of a session
pub fn build_http_client(request_timeout: Duration, connect_timeout: Duration) -> ApiResult<Client> {
    Client::builder()
        .timeout(request_timeout)
        .connect_timeout(connect_timeout)
        .user_agent(concat!("databricks-sp/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ApiError::HttpClient)
}

/// Client for provisioning a service principal in one workspace.
///
/// Holds two pieces of session state: the directory token (set by
/// [`fetch_directory_token`](Self::fetch_directory_token)) and the id of the
/// principal created by [`create_principal`](Self::create_principal). Both
/// start out empty. Every operation issues its request once; nothing is
/// retried.
pub struct ProvisioningClient {
    config: ClientConfig,
    http: Client,
    ad_token: Option<DirectoryToken>,
    sp_id: Option<String>,
}

impl ProvisioningClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = build_http_client(DEFAULT_REQUEST_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)?;
        Ok(Self::with_http_client(config, http))
    }

    /// Create a client around a preconfigured HTTP client
    pub fn with_http_client(config: ClientConfig, http: Client) -> Self {
        Self {
            config,
            http,
            ad_token: None,
            sp_id: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Shared HTTP client (cheap clone)
    pub fn http_client(&self) -> Client {
        self.http.clone()
    }

    /// Groups (by id) that principals created from now on will join
    pub fn set_group_ids(&mut self, group_ids: Vec<String>) {
        self.config.group_ids = group_ids;
    }

    /// Id of the principal created in this session
    pub fn sp_id(&self) -> Option<&str> {
        self.sp_id.as_deref()
    }

    /// Most recently fetched directory token
    pub fn ad_token(&self) -> Option<&str> {
        self.ad_token.as_ref().map(|t| t.access_token.as_str())
    }

    /// Raw JSON of the most recent token response
    pub fn ad_token_response(&self) -> Option<&Value> {
        self.ad_token.as_ref().map(|t| &t.raw_response)
    }

    /// Add the service principal to the workspace through the SCIM API.
    ///
    /// Requires an administrator credential. Group ids set with
    /// [`ClientConfig::with_groups`] are sent as the principal's memberships.
    /// The returned record is the server's response; its `id` becomes the
    /// session's active principal.
    pub async fn create_principal(&mut self, admin_token: &str) -> ApiResult<ServicePrincipal> {
        let url = self.config.sp_url();
        info!(
            "Adding service principal '{}' ({}) to workspace {}",
            self.config.display_name, self.config.client_id, self.config.workspace_id
        );

        let group_ids = self.config.group_ids();
        if !group_ids.is_empty() {
            debug!("Joining groups {:?} on creation", group_ids);
        }
        let body = CreateServicePrincipal::new(&self.config.client_id, &self.config.display_name)
            .with_groups(group_ids.iter().map(String::as_str));
        let response = self
            .http
            .post(&url)
            .bearer_auth(admin_token)
            .header(CONTENT_TYPE, headers::CONTENT_TYPE_SCIM)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let value = json_body("POST", &url, response).await?;
        if value.get("id").and_then(Value::as_str).is_none() {
            return Err(ApiError::missing(&url, "id"));
        }
        let principal: ServicePrincipal = decode(&url, value)?;

        info!("Created service principal with id {}", principal.id());
        self.sp_id = Some(principal.id().to_string());
        Ok(principal)
    }

    /// Fetch a fresh directory token. Always issues a request; the result
    /// replaces whatever token the session held.
    pub async fn fetch_directory_token(&mut self) -> ApiResult<String> {
        let token = request_directory_token(&self.http, &self.config).await?;
        let access_token = token.access_token.clone();
        self.ad_token = Some(token);
        Ok(access_token)
    }

    /// Mint a personal access token for the service principal.
    ///
    /// The directory token is refreshed first so the token API always sees a
    /// current credential.
    pub async fn fetch_personal_access_token(&mut self) -> ApiResult<String> {
        let ad_token = self.fetch_directory_token().await?;
        let url = constants::token_create_endpoint(self.config.host());
        info!("Creating personal access token at {}", url);

        let body = CreateToken {
            comment: self.config.pat_comment(),
            lifetime_seconds: self.config.pat_lifetime_seconds(),
        };
        let response = self
            .http
            .post(&url)
            .bearer_auth(&ad_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let status = response.status();
        debug!("Token create status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Authentication {
                url,
                reason: format!("{}: {}", status, body),
            });
        }

        let value = json_body("POST", &url, response).await?;
        let token = value
            .get("token_value")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::Authentication {
                url: url.clone(),
                reason: "no token_value in response".to_string(),
            })?;

        debug!("Personal access token created");
        Ok(token.to_string())
    }

    /// List every service principal in the workspace
    pub async fn list_principals(
        &self,
        admin_token: &str,
    ) -> ApiResult<ScimListResponse<ServicePrincipal>> {
        let url = self.config.sp_url();
        debug!("Listing service principals at {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(admin_token)
            .header(CONTENT_TYPE, headers::CONTENT_TYPE_SCIM)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let value = json_body("GET", &url, response).await?;
        decode(&url, value)
    }

    /// Find a service principal by display name.
    ///
    /// Scans the whole list; when several principals share the name the last
    /// one in the response is returned.
    pub async fn find_principal(
        &self,
        admin_token: &str,
        display_name: &str,
    ) -> ApiResult<Option<ServicePrincipal>> {
        let listing = self.list_principals(admin_token).await?;

        let mut matches = 0usize;
        let mut requested = None;
        for sp in listing.resources {
            if sp.display_name() == Some(display_name) {
                matches += 1;
                requested = Some(sp);
            }
        }

        match (&requested, matches) {
            (None, _) => info!("Service principal '{}' does not exist", display_name),
            (Some(_), 1) => {}
            (Some(sp), n) => warn!(
                "{} service principals named '{}', using the last one ({})",
                n, display_name, sp.id()
            ),
        }

        Ok(requested)
    }

    /// Remove a service principal from the workspace.
    ///
    /// Uses `id` when given, otherwise the principal created in this session.
    pub async fn remove_principal(
        &self,
        admin_token: &str,
        id: Option<&str>,
    ) -> ApiResult<StatusCode> {
        let id = id
            .or(self.sp_id.as_deref())
            .ok_or(ApiError::MissingPrincipalId)?;
        let url = constants::service_principal_endpoint(self.config.host(), id);
        info!("Removing service principal {}", id);

        let response = self
            .http
            .delete(&url)
            .bearer_auth(admin_token)
            .header(ACCEPT, headers::CONTENT_TYPE_SCIM)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let status = check_status("DELETE", &url, response).await?.status();
        debug!("Delete status: {}", status);
        Ok(status)
    }

    /// Map every workspace group's display name to its id.
    ///
    /// Group membership in SCIM payloads is by id, not name. When two groups
    /// share a display name the later one in the response wins.
    pub async fn fetch_group_id_mapping(
        &self,
        admin_token: &str,
    ) -> ApiResult<HashMap<String, String>> {
        let url = constants::groups_endpoint(self.config.host());
        debug!("Listing groups at {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(admin_token)
            .header(CONTENT_TYPE, headers::CONTENT_TYPE_SCIM)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let value = json_body("GET", &url, response).await?;
        let groups: ScimListResponse<Group> = decode(&url, value)?;

        let mut mapping = HashMap::with_capacity(groups.resources.len());
        for group in groups.resources {
            if let Some(previous) = mapping.insert(group.display_name.clone(), group.id) {
                warn!(
                    "Duplicate group name '{}', replacing id {}",
                    group.display_name, previous
                );
            }
        }
        Ok(mapping)
    }

    /// List the personal access tokens visible to the service principal.
    /// Fetches a directory token first if the session has none.
    pub async fn list_personal_access_tokens(&mut self) -> ApiResult<Value> {
        let ad_token = match self.ad_token().map(str::to_string) {
            Some(token) => token,
            None => self.fetch_directory_token().await?,
        };
        let url = constants::token_list_endpoint(self.config.host());
        debug!("Listing personal access tokens at {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&ad_token)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        json_body("GET", &url, response).await
    }
}

/// Map a non-success response to [`ApiError::Status`]
pub(crate) async fn check_status(
    method: &'static str,
    url: &str,
    response: Response,
) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        method,
        url: url.to_string(),
        status,
        body,
    })
}

/// Check the status, then parse the body as JSON
pub(crate) async fn json_body(method: &'static str, url: &str, response: Response) -> ApiResult<Value> {
    let response = check_status(method, url, response).await?;
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::transport(url, e))?;

    serde_json::from_str(&text).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(url: &str, value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}
