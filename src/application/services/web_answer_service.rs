use crate::domain::ports::SearchSource;
use reqwest::Url;
use std::sync::Arc;

const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search";

/// Answers general questions from the web.
///
/// The primary source is tried first. If it fails or has nothing usable the
/// fallback source is asked; if that is empty too the user gets a Google
/// search link instead.
#[derive(Clone)]
pub struct WebAnswerService {
    primary: Arc<dyn SearchSource>,
    fallback: Arc<dyn SearchSource>,
}

impl WebAnswerService {
    pub fn new(primary: Arc<dyn SearchSource>, fallback: Arc<dyn SearchSource>) -> Self {
        Self { primary, fallback }
    }

    /// Always produces displayable text; failures are described, not raised
    pub async fn answer(&self, query: &str) -> String {
        match self.primary.lookup(query).await {
            Ok(Some(answer)) => return answer,
            Ok(None) => {
                tracing::debug!(
                    "{} had no answer, trying {}",
                    self.primary.source_name(),
                    self.fallback.source_name()
                );
            }
            Err(e) => {
                metrics::counter!("askroy_provider_failures_total", "provider" => self.primary.source_name())
                    .increment(1);
                tracing::warn!(
                    "{} lookup failed, trying {}: {}",
                    self.primary.source_name(),
                    self.fallback.source_name(),
                    e
                );
            }
        }

        match self.fallback.lookup(query).await {
            Ok(Some(answer)) => answer,
            Ok(None) => format!(
                "Sorry, I couldn't find a complete answer. You can try searching here: {}",
                google_search_url(query)
            ),
            Err(e) => {
                metrics::counter!("askroy_provider_failures_total", "provider" => self.fallback.source_name())
                    .increment(1);
                tracing::warn!("{} lookup failed: {}", self.fallback.source_name(), e);
                format!("Backup lookup failed: {}", e)
            }
        }
    }
}

/// `https://www.google.com/search?q=<url-encoded query>`
pub fn google_search_url(query: &str) -> String {
    match Url::parse_with_params(GOOGLE_SEARCH_URL, &[("q", query)]) {
        Ok(url) => url.to_string(),
        Err(_) => GOOGLE_SEARCH_URL.to_string(),
    }
}
