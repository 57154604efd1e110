use super::http_client::ensure_success;
use crate::domain::errors::{ProviderError, ProviderResult};
use crate::domain::ports::OfferProvider;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that answers questions about credit card offers. \
Only use the card catalogue provided below. If the catalogue does not cover the question, \
say that you don't have that information. Keep answers short.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Card-offer summarizer backed by an OpenAI-compatible chat completion API
pub struct OpenAiOfferProvider {
    http_client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAiOfferProvider {
    pub fn new(
        http_client: Client,
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_key,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl OfferProvider for OpenAiOfferProvider {
    async fn ask(&self, query: &str, catalogue: &str) -> ProviderResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingApiKey("OPENAI_API_KEY"))?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: format!("{}\n\nCard catalogue:\n{}", SYSTEM_INSTRUCTION, catalogue),
                },
                ChatMessage {
                    role: "user",
                    content: query.to_string(),
                },
            ],
            temperature: 0.3,
        };

        tracing::debug!("Requesting card offer answer from {}", self.endpoint());

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let response: ChatResponse = ensure_success(response).await?.json().await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ProviderError::Malformed("completion had no content".to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(base_url: &str, api_key: Option<&str>) -> OpenAiOfferProvider {
        OpenAiOfferProvider::new(
            Client::new(),
            api_key.map(str::to_string),
            base_url,
            "gpt-3.5-turbo",
        )
    }

    #[tokio::test]
    async fn test_returns_completion_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({"model": "gpt-3.5-turbo"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": " Use Amazon Pay ICICI. "}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let answer = provider(&server.uri(), Some("test-key"))
            .ask("cashback on amazon", "catalogue")
            .await
            .unwrap();
        assert_eq!(answer, "Use Amazon Pay ICICI.");
    }

    #[tokio::test]
    async fn test_http_error_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let err = provider(&server.uri(), Some("wrong"))
            .ask("offers", "catalogue")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Http { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_empty_choices_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = provider(&server.uri(), Some("key"))
            .ask("offers", "catalogue")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = provider(&server.uri(), None)
            .ask("offers", "catalogue")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey("OPENAI_API_KEY")));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider = provider("https://api.openai.com/v1/", None);
        assert_eq!(provider.endpoint(), "https://api.openai.com/v1/chat/completions");
    }
}
