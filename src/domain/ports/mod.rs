pub mod offer_provider;
pub mod search_source;
pub mod time_service;

pub use offer_provider::*;
pub use search_source::*;
pub use time_service::*;
