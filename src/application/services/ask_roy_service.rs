use super::intent_classifier::{HolidayQuery, Intent, IntentClassifier, ProfileTopic};
use super::replies;
use super::web_answer_service::WebAnswerService;
use crate::domain::entities::{
    ist_today, AnswerResult, AvailabilityState, HolidayCalendar, Profile, WorkSchedule,
};
use crate::domain::ports::{OfferProvider, TimeService};
use crate::domain::services::{next_holiday, previous_holiday, resolve_status, this_week_holidays};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Everything the assistant knows about Roy. Immutable after startup.
#[derive(Debug, Clone)]
pub struct RoyKnowledge {
    pub calendar: HolidayCalendar,
    pub schedule: WorkSchedule,
    pub profile: Profile,
    pub card_catalogue: String,
}

/// Answers one question end to end
#[derive(Clone)]
pub struct AskRoyService {
    classifier: IntentClassifier,
    knowledge: Arc<RoyKnowledge>,
    time_service: Arc<dyn TimeService>,
    offer_provider: Arc<dyn OfferProvider>,
    web_answers: WebAnswerService,
}

impl AskRoyService {
    pub fn new(
        knowledge: Arc<RoyKnowledge>,
        time_service: Arc<dyn TimeService>,
        offer_provider: Arc<dyn OfferProvider>,
        web_answers: WebAnswerService,
    ) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            knowledge,
            time_service,
            offer_provider,
            web_answers,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.time_service.now()
    }

    pub fn knowledge(&self) -> &RoyKnowledge {
        &self.knowledge
    }

    /// Roy's availability at `now`
    pub fn status_at(&self, now: DateTime<Utc>) -> AvailabilityState {
        resolve_status(now, &self.knowledge.calendar, &self.knowledge.schedule)
    }

    /// Roy's availability right now
    pub fn current_status(&self) -> AvailabilityState {
        self.status_at(self.now())
    }

    /// Classify and answer a question using the current time
    pub async fn classify_and_answer(&self, query: &str) -> AnswerResult {
        self.answer_at(query, self.now()).await
    }

    /// Classify and answer a question as of `now`. Never fails.
    pub async fn answer_at(&self, query: &str, now: DateTime<Utc>) -> AnswerResult {
        let intent = self.classifier.classify(query);
        tracing::debug!(?intent, "Routing query");

        let result = match intent {
            Intent::Holiday(holiday_query) => {
                AnswerResult::roy(self.holiday_answer(holiday_query, now))
            }
            Intent::Profile(topic) => AnswerResult::roy(self.profile_answer(topic)),
            Intent::Availability => {
                let state = self.status_at(now);
                AnswerResult::roy(format!(
                    "{} {}",
                    state.status_line(),
                    state.suffix(&self.knowledge.schedule)
                ))
            }
            Intent::Greeting(reply) => AnswerResult::roy(reply),
            Intent::Offers => AnswerResult::offers(self.offer_answer(query).await),
            Intent::Web => AnswerResult::web(self.web_answers.answer(query).await),
        };

        metrics::counter!("askroy_answers_total", "source" => result.source.as_str())
            .increment(1);

        result
    }

    fn holiday_answer(&self, query: HolidayQuery, now: DateTime<Utc>) -> String {
        let calendar = &self.knowledge.calendar;
        let today = ist_today(now);

        match query {
            HolidayQuery::Next => replies::next_holiday_reply(next_holiday(today, calendar)),
            HolidayQuery::Previous => {
                replies::previous_holiday_reply(previous_holiday(today, calendar))
            }
            HolidayQuery::ThisWeek => {
                replies::this_week_reply(&this_week_holidays(today, calendar))
            }
            HolidayQuery::Listing => replies::holiday_listing(calendar),
        }
    }

    fn profile_answer(&self, topic: ProfileTopic) -> String {
        let profile = &self.knowledge.profile;

        match topic {
            ProfileTopic::Identity => profile.identity_answer(),
            ProfileTopic::FullName => profile.full_name_answer(),
            ProfileTopic::Email => profile.email_answer(),
            ProfileTopic::Company => profile.company_answer(),
            ProfileTopic::Team => profile.team_answer(),
            ProfileTopic::Manager => profile.manager_answer(),
            ProfileTopic::PersonalInfo => profile.personal_info_refusal(),
            ProfileTopic::WorkingHours => replies::working_hours_reply(&self.knowledge.schedule),
        }
    }

    async fn offer_answer(&self, query: &str) -> String {
        match self
            .offer_provider
            .ask(query, &self.knowledge.card_catalogue)
            .await
        {
            Ok(answer) => answer,
            Err(e) => {
                let provider = self.offer_provider.provider_name();
                metrics::counter!("askroy_provider_failures_total", "provider" => provider)
                    .increment(1);
                tracing::warn!("Offer lookup via {} failed: {}", provider, e);
                format!("Error from {}: {}", provider, e)
            }
        }
    }
}
