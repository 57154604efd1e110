pub mod duckduckgo;
pub mod http_client;
pub mod openai_offer_provider;
pub mod serpapi;

pub use duckduckgo::DuckDuckGoSource;
pub use http_client::build_http_client;
pub use openai_offer_provider::OpenAiOfferProvider;
pub use serpapi::SerpApiSource;
