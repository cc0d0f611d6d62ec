use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::constants::{
    self, AZURE_DATABRICKS_RESOURCE_ID, DEFAULT_PAT_COMMENT, LOGIN_HOST,
};

/// Workspace identity and directory credentials of one service principal
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub workspace_id: String,
    pub client_id: String,
    pub tenant_id: String,
    pub application_secret: String,
    pub display_name: String,
    pub resource_id: String,
    workspace_host: String,
    login_host: String,
    pat_comment: String,
    pat_lifetime_seconds: Option<u64>,
    pub(crate) group_ids: Vec<String>,
}

impl ClientConfig {
    pub fn new(
        workspace_id: impl Into<String>,
        client_id: impl Into<String>,
        tenant_id: impl Into<String>,
        application_secret: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        let workspace_id = workspace_id.into();
        let workspace_host = constants::workspace_host(&workspace_id);

        Self {
            workspace_id,
            client_id: client_id.into(),
            tenant_id: tenant_id.into(),
            application_secret: application_secret.into(),
            display_name: display_name.into(),
            resource_id: AZURE_DATABRICKS_RESOURCE_ID.to_string(),
            workspace_host,
            login_host: LOGIN_HOST.to_string(),
            pat_comment: DEFAULT_PAT_COMMENT.to_string(),
            pat_lifetime_seconds: None,
            group_ids: Vec::new(),
        }
    }

    /// Point workspace calls at a different host (private link, mock servers)
    pub fn with_workspace_host(mut self, host: impl Into<String>) -> Self {
        self.workspace_host = host.into();
        self
    }

    /// Point the OAuth exchange at a different login host (sovereign clouds, mock servers)
    pub fn with_login_host(mut self, host: impl Into<String>) -> Self {
        self.login_host = host.into();
        self
    }

    pub fn with_pat_comment(mut self, comment: impl Into<String>) -> Self {
        self.pat_comment = comment.into();
        self
    }

    pub fn with_pat_lifetime(mut self, seconds: Option<u64>) -> Self {
        self.pat_lifetime_seconds = seconds;
        self
    }

    /// Groups (by id) the principal joins when it is created
    pub fn with_groups(mut self, group_ids: Vec<String>) -> Self {
        self.group_ids = group_ids;
        self
    }

    pub fn host(&self) -> &str {
        &self.workspace_host
    }

    pub fn login_host(&self) -> &str {
        &self.login_host
    }

    pub fn pat_comment(&self) -> &str {
        &self.pat_comment
    }

    pub fn pat_lifetime_seconds(&self) -> Option<u64> {
        self.pat_lifetime_seconds
    }

    pub fn group_ids(&self) -> &[String] {
        &self.group_ids
    }

    /// SCIM endpoint for service principal management
    pub fn sp_url(&self) -> String {
        constants::service_principals_endpoint(&self.workspace_host)
    }

    pub fn token_url(&self) -> String {
        constants::token_endpoint(&self.login_host, &self.tenant_id)
    }
}

/// Directory token plus the response it was taken from
#[derive(Debug, Clone)]
pub struct DirectoryToken {
    pub access_token: String,
    pub raw_response: Value,
}

/// `{ "value": ... }` entry used by SCIM multi-valued attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScimValue {
    pub value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScimValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            extra: Map::new(),
        }
    }
}

/// Service principal record as returned by the SCIM API.
///
/// The typed view is read out of the received JSON object, which is kept
/// and serialized back unchanged: null and empty attributes, and keys not
/// modelled here, survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ServicePrincipal {
    id: String,
    display_name: Option<String>,
    application_id: Option<String>,
    entitlements: Vec<ScimValue>,
    groups: Vec<ScimValue>,
    raw: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrincipalFields {
    id: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    application_id: Option<String>,
    #[serde(default)]
    entitlements: Option<Vec<ScimValue>>,
    #[serde(default)]
    groups: Option<Vec<ScimValue>>,
}

impl TryFrom<Map<String, Value>> for ServicePrincipal {
    type Error = serde_json::Error;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields = PrincipalFields::deserialize(Value::Object(raw.clone()))?;
        Ok(Self {
            id: fields.id,
            display_name: fields.display_name,
            application_id: fields.application_id,
            entitlements: fields.entitlements.unwrap_or_default(),
            groups: fields.groups.unwrap_or_default(),
            raw,
        })
    }
}

impl From<ServicePrincipal> for Map<String, Value> {
    fn from(principal: ServicePrincipal) -> Self {
        principal.raw
    }
}

impl ServicePrincipal {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn application_id(&self) -> Option<&str> {
        self.application_id.as_deref()
    }

    pub fn entitlements(&self) -> &[ScimValue] {
        &self.entitlements
    }

    /// Groups the principal belongs to, by id
    pub fn groups(&self) -> &[ScimValue] {
        &self.groups
    }

    /// Any attribute of the record as received
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.raw
    }
}

/// Body of a service principal creation request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicePrincipal<'a> {
    pub schemas: [&'a str; 1],
    pub application_id: &'a str,
    pub display_name: &'a str,
    pub entitlements: Vec<ScimValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ScimValue>,
}

impl<'a> CreateServicePrincipal<'a> {
    pub fn new(application_id: &'a str, display_name: &'a str) -> Self {
        Self {
            schemas: [constants::SERVICE_PRINCIPAL_SCHEMA],
            application_id,
            display_name,
            entitlements: vec![ScimValue::new(constants::CLUSTER_CREATE_ENTITLEMENT)],
            groups: Vec::new(),
        }
    }

    /// Make the principal a member of these groups (by id) on creation
    pub fn with_groups<I, S>(mut self, group_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = group_ids.into_iter().map(ScimValue::new).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub display_name: String,
}

/// SCIM list envelope. The workspace omits `Resources` for empty lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScimListResponse<T> {
    #[serde(rename = "totalResults", default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    #[serde(rename = "Resources", default = "Vec::new")]
    pub resources: Vec<T>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a PAT creation request
#[derive(Debug, Serialize)]
pub struct CreateToken<'a> {
    pub comment: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime_seconds: Option<u64>,
}
