use chrono::{DateTime, Utc};

/// Source of the current instant. Read once per request.
pub trait TimeService: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeService;

impl TimeService for SystemTimeService {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeService(pub DateTime<Utc>);

impl TimeService for FixedTimeService {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
