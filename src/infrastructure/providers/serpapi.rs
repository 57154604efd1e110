use super::http_client::{ensure_success, non_empty};
use crate::domain::errors::{ProviderError, ProviderResult};
use crate::domain::ports::SearchSource;
use reqwest::Client;
use serde_json::Value;

/// Primary web search via SerpAPI (Google results)
pub struct SerpApiSource {
    http_client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl SerpApiSource {
    pub fn new(http_client: Client, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key,
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl SearchSource for SerpApiSource {
    async fn lookup(&self, query: &str) -> ProviderResult<Option<String>> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingApiKey("SERPAPI_API_KEY"))?;

        let url = format!("{}/search.json", self.base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .get(url)
            .query(&[("engine", "google"), ("q", query), ("api_key", api_key)])
            .send()
            .await?;

        let body: Value = ensure_success(response).await?.json().await?;
        Ok(extract_answer(&body))
    }

    fn source_name(&self) -> &'static str {
        "SerpAPI"
    }
}

/// Best short answer in a SerpAPI response.
///
/// Priority: answer box answer, answer box snippet, knowledge graph
/// description, first organic result snippet.
pub fn extract_answer(body: &Value) -> Option<String> {
    let answer_box = body.get("answer_box");

    non_empty(answer_box.and_then(|b| b.get("answer")))
        .or_else(|| non_empty(answer_box.and_then(|b| b.get("snippet"))))
        .or_else(|| non_empty(body.pointer("/knowledge_graph/description")))
        .or_else(|| non_empty(body.pointer("/organic_results/0/snippet")))
}
