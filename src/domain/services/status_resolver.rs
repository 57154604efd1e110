use crate::domain::entities::{to_ist, AvailabilityState, HolidayCalendar, WorkSchedule};
use chrono::{DateTime, Datelike, NaiveTime, Timelike, Utc};

/// Resolve Roy's availability at `now`.
///
/// Checks run in fixed priority order, first match wins:
/// mandatory holiday, non-working weekday, lunch break, working hours.
/// Time-of-day is compared at minute precision and both range ends are
/// inclusive, so 18:00:59 still counts as 18:00.
pub fn resolve_status(
    now: DateTime<Utc>,
    calendar: &HolidayCalendar,
    schedule: &WorkSchedule,
) -> AvailabilityState {
    let local = to_ist(now);

    if let Some(holiday) = calendar.mandatory_on(local.date_naive()) {
        return AvailabilityState::OnHoliday(holiday.name.clone());
    }

    if !schedule.is_work_day(local.weekday()) {
        return AvailabilityState::Weekend;
    }

    let time = NaiveTime::from_hms_opt(local.hour(), local.minute(), 0).unwrap_or(local.time());

    if schedule.lunch_start <= time && time <= schedule.lunch_end {
        AvailabilityState::LunchBreak
    } else if schedule.start_time <= time && time <= schedule.end_time {
        AvailabilityState::Available
    } else {
        AvailabilityState::OutsideHours
    }
}
