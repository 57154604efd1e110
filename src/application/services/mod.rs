pub mod ask_roy_service;
pub mod intent_classifier;
pub mod replies;
pub mod web_answer_service;

pub use ask_roy_service::*;
pub use intent_classifier::*;
pub use web_answer_service::*;
