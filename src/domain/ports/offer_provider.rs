use crate::domain::errors::ProviderResult;

/// Answers card-offer questions, restricted to a fixed catalogue
#[async_trait::async_trait]
pub trait OfferProvider: Send + Sync {
    /// Ask the provider about `query`, using only `catalogue` as ground truth
    async fn ask(&self, query: &str, catalogue: &str) -> ProviderResult<String>;

    /// Name used in error messages, e.g. "OpenAI"
    fn provider_name(&self) -> &'static str;
}
