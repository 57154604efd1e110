use askroy::domain::errors::{ProviderError, ProviderResult};
use askroy::domain::ports::{OfferProvider, SearchSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Offer provider that records calls and returns a canned reply
pub struct FakeOfferProvider {
    reply: Option<String>,
    calls: AtomicUsize,
    last_query: Mutex<Option<String>>,
    last_catalogue: Mutex<Option<String>>,
}

impl FakeOfferProvider {
    pub fn answering(reply: &str) -> Arc<Self> {
        Arc::new(Self::with_reply(Some(reply.to_string())))
    }

    /// Every call fails with an HTTP 500
    pub fn failing() -> Arc<Self> {
        Arc::new(Self::with_reply(None))
    }

    fn with_reply(reply: Option<String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
            last_catalogue: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }

    pub fn last_catalogue(&self) -> Option<String> {
        self.last_catalogue.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl OfferProvider for FakeOfferProvider {
    async fn ask(&self, query: &str, catalogue: &str) -> ProviderResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.to_string());
        *self.last_catalogue.lock().unwrap() = Some(catalogue.to_string());

        self.reply.clone().ok_or(ProviderError::Http {
            status: 500,
            body: "upstream down".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "OpenAI"
    }
}

/// Search source with a fixed outcome
pub struct FakeSearchSource {
    outcome: Outcome,
    calls: AtomicUsize,
}

enum Outcome {
    Answer(String),
    Empty,
    Fail,
}

impl FakeSearchSource {
    pub fn answering(answer: &str) -> Arc<Self> {
        Arc::new(Self::new(Outcome::Answer(answer.to_string())))
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self::new(Outcome::Empty))
    }

    /// Every lookup times out
    pub fn failing() -> Arc<Self> {
        Arc::new(Self::new(Outcome::Fail))
    }

    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SearchSource for FakeSearchSource {
    async fn lookup(&self, _query: &str) -> ProviderResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            Outcome::Answer(answer) => Ok(Some(answer.clone())),
            Outcome::Empty => Ok(None),
            Outcome::Fail => Err(ProviderError::Timeout("deadline elapsed".to_string())),
        }
    }

    fn source_name(&self) -> &'static str {
        "FakeSearch"
    }
}
