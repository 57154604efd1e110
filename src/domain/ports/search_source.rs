use crate::domain::errors::ProviderResult;

/// A web search backend able to extract a short answer for a query
#[async_trait::async_trait]
pub trait SearchSource: Send + Sync {
    /// `Ok(None)` means the backend answered but had nothing usable
    async fn lookup(&self, query: &str) -> ProviderResult<Option<String>>;

    fn source_name(&self) -> &'static str;
}
