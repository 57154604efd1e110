use crate::application::services::{AskRoyService, RoyKnowledge, WebAnswerService};
use crate::config::{Config, ConfigError};
use crate::domain::entities::{HolidayCalendar, Profile, WorkSchedule, CARD_CATALOGUE};
use crate::domain::ports::{OfferProvider, SearchSource, SystemTimeService, TimeService};
use crate::infrastructure::http::AppState;
use crate::infrastructure::providers::{
    build_http_client, DuckDuckGoSource, OpenAiOfferProvider, SerpApiSource,
};
use std::sync::Arc;

/// Load the holiday calendar, failing fast on malformed data
pub fn load_calendar(config: &Config) -> Result<HolidayCalendar, ConfigError> {
    let calendar = match &config.holiday_calendar_path {
        Some(path) => {
            tracing::info!("Loading holiday calendar from {}", path.display());
            HolidayCalendar::from_json_file(path)?
        }
        None => HolidayCalendar::builtin()?,
    };

    tracing::info!(
        "Holiday calendar loaded: {} mandatory, {} optional",
        calendar.mandatory().len(),
        calendar.optional().len()
    );

    Ok(calendar)
}

pub fn build_app_state(config: &Config) -> Result<AppState, ConfigError> {
    let knowledge = Arc::new(RoyKnowledge {
        calendar: load_calendar(config)?,
        schedule: WorkSchedule::default(),
        profile: Profile::default(),
        card_catalogue: CARD_CATALOGUE.to_string(),
    });

    // One client for all providers, bounded by the configured timeout
    let http_client = build_http_client(config.provider_timeout)
        .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
    tracing::info!(
        "HTTP client initialized with {}s timeout",
        config.provider_timeout.as_secs()
    );

    let offer_provider = Arc::new(OpenAiOfferProvider::new(
        http_client.clone(),
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.openai_model.clone(),
    )) as Arc<dyn OfferProvider>;
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set, card offer questions will fail");
    }

    let primary = Arc::new(SerpApiSource::new(
        http_client.clone(),
        config.serpapi_api_key.clone(),
        config.serpapi_base_url.clone(),
    )) as Arc<dyn SearchSource>;
    if config.serpapi_api_key.is_none() {
        tracing::warn!("SERPAPI_API_KEY not set, web questions will use the fallback search");
    }

    let fallback = Arc::new(DuckDuckGoSource::new(
        http_client,
        config.duckduckgo_base_url.clone(),
    )) as Arc<dyn SearchSource>;

    let ask_roy = AskRoyService::new(
        knowledge,
        Arc::new(SystemTimeService) as Arc<dyn TimeService>,
        offer_provider,
        WebAnswerService::new(primary, fallback),
    );
    tracing::info!("Ask Roy service initialized");

    Ok(AppState::new(ask_roy))
}
