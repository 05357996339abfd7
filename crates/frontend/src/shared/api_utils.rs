//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making JSON requests.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::system::auth::storage;

/// Port the API server listens on, next to the host serving the bundle.
pub const API_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Ошибка сети: {0}")]
    Network(String),
    #[error("Ошибка сервера: {0}")]
    Status(u16),
    #[error("Ошибка парсинга: {0}")]
    Parse(String),
    #[error("Ошибка формирования запроса: {0}")]
    Serialize(String),
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// GET `path` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_auth(Request::get(&api_url(path)))
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await
}

/// POST `body` as JSON to `path` and decode the JSON answer.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await
}

async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_body(&text)
}

/// Decodes a response body; an empty body reads as JSON `null`.
pub fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_null() {
        let rows: Option<Vec<i64>> = parse_body("  ").unwrap();
        assert_eq!(rows, None);
        let rows: Option<Vec<i64>> = parse_body("null").unwrap();
        assert_eq!(rows, None);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = parse_body::<Vec<i64>>("{oops").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
        assert!(err.to_string().starts_with("Ошибка парсинга"));
    }

    #[test]
    fn test_status_message() {
        assert_eq!(ApiError::Status(502).to_string(), "Ошибка сервера: 502");
    }
}
