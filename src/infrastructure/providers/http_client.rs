use crate::domain::errors::{ProviderError, ProviderResult};
use reqwest::{Client, Response};
use std::time::Duration;

/// Longest error body kept in messages
const MAX_ERROR_BODY: usize = 500;

/// Shared outbound HTTP client. Every provider call is bounded by `timeout`.
pub fn build_http_client(timeout: Duration) -> ProviderResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("askroy/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ProviderError::Transport(format!("failed to build HTTP client: {}", e)))
}

/// Turn non-2xx responses into `ProviderError::Http`
pub async fn ensure_success(response: Response) -> ProviderResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => truncate(&body, MAX_ERROR_BODY),
        Err(_) => String::new(),
    };

    Err(ProviderError::Http {
        status: status.as_u16(),
        body,
    })
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }

    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// Non-empty, trimmed string at `value`
pub(crate) fn non_empty(value: Option<&serde_json::Value>) -> Option<String> {
    value
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
