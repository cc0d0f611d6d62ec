use log::{debug, info};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::constants::headers;
use super::error::{ApiError, ApiResult};
use super::models::{ClientConfig, DirectoryToken};

/// Run the OAuth2 client-credentials grant against the directory token
/// endpoint and return the issued token with its raw response.
///
/// A non-success status or a response without `access_token` is an
/// authentication failure; the body is never parsed before the status is
/// checked.
pub async fn request_directory_token(
    http: &Client,
    config: &ClientConfig,
) -> ApiResult<DirectoryToken> {
    let url = config.token_url();
    info!(
        "Requesting directory token for client {} in tenant {}",
        config.client_id, config.tenant_id
    );

    let response = http
        .post(&url)
        .header(CONTENT_TYPE, headers::CONTENT_TYPE_FORM)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", config.client_id.as_str()),
            ("resource", config.resource_id.as_str()),
            ("client_secret", config.application_secret.as_str()),
        ])
        .send()
        .await
        .map_err(|e| ApiError::transport(&url, e))?;

    let status = response.status();
    debug!("Token request status: {}", status);

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::transport(&url, e))?;

    if !status.is_success() {
        return Err(ApiError::Authentication {
            url,
            reason: format!("{}: {}", status, body),
        });
    }

    let raw_response: Value =
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.clone(),
            source,
        })?;

    let access_token = raw_response
        .get("access_token")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Authentication {
            url: url.clone(),
            reason: "no access_token in response".to_string(),
        })?
        .to_string();

    debug!("Directory token obtained");
    Ok(DirectoryToken {
        access_token,
        raw_response,
    })
}
