pub mod assistant;
pub mod catalog;
pub mod coins;
pub mod community;
pub mod dashboard;
pub mod profile;
pub mod squad;
pub mod streaks;
pub mod transactions;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use stash_common::ErrorBody;
use thiserror::Error;
use web_sys::FormData;

use crate::settings;

/// Transport-level failure. The `Display` text is what views show to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Non-success status, preferring the server's own message when it sent one.
    pub fn from_status(status: u16, body: Option<&ErrorBody>) -> Self {
        let message = body
            .and_then(ErrorBody::message)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP error: {}", status));
        Self::Status { status, message }
    }
}

/// Escapes an id for use as a path segment.
pub(crate) fn segment(id: &str) -> String {
    String::from(js_sys::encode_uri_component(id))
}

async fn read<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, response.status());
        let body = response.json::<ErrorBody>().await.ok();
        let error = ApiError::from_status(response.status(), body.as_ref());
        log::error!("{} {} - {}", method, endpoint, error);
        return Err(error);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    response.json::<T>().await.map_err(|e| {
        let error = ApiError::Decode(e.to_string());
        log::error!("{} {} - {}", method, endpoint, error);
        error
    })
}

fn request_failed(method: &str, endpoint: &str, e: gloo_net::Error) -> ApiError {
    let error = ApiError::Request(e.to_string());
    log::error!("{} {} - {}", method, endpoint, error);
    error
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    get_with_query(endpoint, &[]).await
}

/// GET with query parameters, e.g. `[("intent", "OFFERING")]`
pub async fn get_with_query<T>(endpoint: &str, query: &[(&str, &str)]) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = settings::api_url(endpoint);
    log::debug!("GET request to: {} {:?}", url, query);

    let response = Request::get(&url)
        .query(query.iter().copied())
        .send()
        .await
        .map_err(|e| request_failed("GET", endpoint, e))?;

    let data = read("GET", endpoint, response).await?;
    log::debug!("GET {} - Success", endpoint);
    Ok(data)
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = settings::api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error = ApiError::Encode(e.to_string());
            log::error!("POST {} - {}", endpoint, error);
            error
        })?
        .send()
        .await
        .map_err(|e| request_failed("POST", endpoint, e))?;

    let data = read("POST", endpoint, response).await?;
    log::info!("POST {} - Success", endpoint);
    Ok(data)
}

/// POST without a request body
pub async fn post_empty<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = settings::api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| request_failed("POST", endpoint, e))?;

    let data = read("POST", endpoint, response).await?;
    log::info!("POST {} - Success", endpoint);
    Ok(data)
}

/// Multipart POST. The browser sets the boundary header itself.
pub async fn post_multipart<T>(endpoint: &str, form: FormData) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = settings::api_url(endpoint);
    log::debug!("POST multipart request to: {}", url);

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| {
            let error = ApiError::Encode(e.to_string());
            log::error!("POST {} - {}", endpoint, error);
            error
        })?
        .send()
        .await
        .map_err(|e| request_failed("POST", endpoint, e))?;

    let data = read("POST", endpoint, response).await?;
    log::info!("POST {} - Success", endpoint);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_without_body() {
        let error = ApiError::from_status(502, None);
        assert_eq!(error.to_string(), "HTTP error: 502");
    }

    #[test]
    fn test_status_prefers_server_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Post not found"}"#).unwrap();
        let error = ApiError::from_status(404, Some(&body));
        assert_eq!(
            error,
            ApiError::Status {
                status: 404,
                message: "Post not found".to_string()
            }
        );
        assert_eq!(error.to_string(), "Post not found");
    }

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            ApiError::Request("NetworkError".to_string()).to_string(),
            "Request failed: NetworkError"
        );
        assert_eq!(
            ApiError::Decode("missing field `id`".to_string()).to_string(),
            "Failed to parse response: missing field `id`"
        );
    }
}
