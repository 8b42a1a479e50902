//! Generic HTTP fetching with status and parse error classification

use reqwest::Client;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches a URL and parses the JSON body.
///
/// Every call hits the network; a failed cycle is re-run by the caller.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
/// * `headers` - Extra request headers (cookies, schedule filter)
#[instrument(skip(client, headers))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    headers: HeaderMap,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).headers(headers).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(status_error(status_code, reason, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(512).collect();
    debug!("Response text (first 512 chars): {preview}");

    parse_body(&response_text, url)
}

/// Maps a non-success HTTP status to the matching error variant.
pub(super) fn status_error(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        404 => AppError::api_not_found(url),
        401 | 403 => AppError::api_unauthorized(status_code, url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Parses a response body, telling empty, non-JSON and wrongly shaped bodies apart.
pub(super) fn parse_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &body.chars().take(200).collect::<String>()
            );

            let trimmed = body.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
