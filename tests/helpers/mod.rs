#![allow(dead_code)]
pub mod fakes;

pub use fakes::*;

use askroy::application::services::{AskRoyService, RoyKnowledge, WebAnswerService};
use askroy::domain::entities::{HolidayCalendar, Profile, WorkSchedule, CARD_CATALOGUE, IST};
use askroy::domain::ports::{FixedTimeService, TimeService};
use askroy::infrastructure::http::AppState;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::sync::Arc;

/// Instant for an IST wall-clock time
pub fn ist(y: i32, m: u32, d: u32, hour: u32, min: u32) -> DateTime<Utc> {
    IST.with_ymd_and_hms(y, m, d, hour, min, 0)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn ist_on(date: NaiveDate, hour: u32, min: u32) -> DateTime<Utc> {
    let local = date.and_hms_opt(hour, min, 0).unwrap();
    IST.from_local_datetime(&local)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn builtin_calendar() -> HolidayCalendar {
    HolidayCalendar::builtin().expect("built-in calendar should load")
}

pub fn knowledge() -> Arc<RoyKnowledge> {
    Arc::new(RoyKnowledge {
        calendar: builtin_calendar(),
        schedule: WorkSchedule::default(),
        profile: Profile::default(),
        card_catalogue: CARD_CATALOGUE.to_string(),
    })
}

pub struct TestRig {
    pub service: AskRoyService,
    pub offers: Arc<FakeOfferProvider>,
    pub primary: Arc<FakeSearchSource>,
    pub fallback: Arc<FakeSearchSource>,
}

/// Service pinned at `now`, with answering fakes behind it
pub fn rig_at(now: DateTime<Utc>) -> TestRig {
    rig_with(
        now,
        FakeOfferProvider::answering("Use the SBI Cashback Credit Card for 5% back online."),
        FakeSearchSource::answering("Paris is the capital of France."),
        FakeSearchSource::empty(),
    )
}

pub fn rig_with(
    now: DateTime<Utc>,
    offers: Arc<FakeOfferProvider>,
    primary: Arc<FakeSearchSource>,
    fallback: Arc<FakeSearchSource>,
) -> TestRig {
    let service = AskRoyService::new(
        knowledge(),
        Arc::new(FixedTimeService(now)) as Arc<dyn TimeService>,
        offers.clone(),
        WebAnswerService::new(primary.clone(), fallback.clone()),
    );

    TestRig {
        service,
        offers,
        primary,
        fallback,
    }
}

pub fn app_state_at(now: DateTime<Utc>) -> AppState {
    AppState::new(rig_at(now).service)
}
