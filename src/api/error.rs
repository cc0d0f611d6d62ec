use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the workspace and directory API calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, DNS or TLS failure before a response was received
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Token exchange rejected, or the token field was absent from the response
    #[error("authentication failed against {url}: {reason}")]
    Authentication { url: String, reason: String },

    /// Non-success status from a workspace call
    #[error("{method} {url} returned {status}: {body}")]
    Status {
        method: &'static str,
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("service principal '{0}' not found")]
    PrincipalNotFound(String),

    #[error("no service principal id given and none was created in this session")]
    MissingPrincipalId,

    /// Expected key missing from a JSON body
    #[error("response from {url} is missing '{field}'")]
    MalformedResponse { url: String, field: String },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot derive a warehouse id from HTTP path '{0}'")]
    InvalidHostPath(String),

    #[error("statement {statement_id} finished in state {state}: {message}")]
    QueryFailed {
        statement_id: String,
        state: String,
        message: String,
    },
}

impl ApiError {
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        ApiError::Transport {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn missing(url: &str, field: &str) -> Self {
        ApiError::MalformedResponse {
            url: url.to_string(),
            field: field.to_string(),
        }
    }

    /// HTTP status attached to the error, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport { source, .. } => source.status(),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
