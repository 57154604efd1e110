use super::http_client::{ensure_success, non_empty};
use crate::domain::errors::{ProviderError, ProviderResult};
use crate::domain::ports::SearchSource;
use reqwest::Client;
use serde_json::Value;

/// Fallback web search via the DuckDuckGo Instant Answer API (no key needed)
pub struct DuckDuckGoSource {
    http_client: Client,
    base_url: String,
}

impl DuckDuckGoSource {
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl SearchSource for DuckDuckGoSource {
    async fn lookup(&self, query: &str) -> ProviderResult<Option<String>> {
        let url = format!("{}/", self.base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .get(url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await?;

        // The API answers with a javascript content type, so parse the text
        let text = ensure_success(response).await?.text().await?;
        let body: Value =
            serde_json::from_str(&text).map_err(|e| ProviderError::Malformed(e.to_string()))?;

        Ok(extract_answer(&body))
    }

    fn source_name(&self) -> &'static str {
        "DuckDuckGo"
    }
}

/// `AbstractText`, else the first related topic's text
pub fn extract_answer(body: &Value) -> Option<String> {
    non_empty(body.get("AbstractText"))
        .or_else(|| non_empty(body.pointer("/RelatedTopics/0/Text")))
}
