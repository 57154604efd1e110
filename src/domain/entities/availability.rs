use super::schedule::WorkSchedule;
use std::fmt;

/// Roy's availability at a given instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityState {
    OnHoliday(String),
    Weekend,
    LunchBreak,
    Available,
    OutsideHours,
}

impl AvailabilityState {
    /// One-line status shown at the top of the page
    pub fn status_line(&self) -> String {
        match self {
            AvailabilityState::OnHoliday(name) => {
                format!("🌴 Roy is on holiday today ({}).", name)
            }
            AvailabilityState::Weekend => "🏖️ Roy is off for the weekend.".to_string(),
            AvailabilityState::LunchBreak => "🍽️ Roy is on a lunch break.".to_string(),
            AvailabilityState::Available => "✅ Roy is available right now.".to_string(),
            AvailabilityState::OutsideHours => "🌙 Roy is outside working hours.".to_string(),
        }
    }

    /// Follow-up advice appended when someone asks about Roy's whereabouts
    pub fn suffix(&self, schedule: &WorkSchedule) -> String {
        match self {
            AvailabilityState::OnHoliday(_) => {
                "Replies may be delayed until the next working day.".to_string()
            }
            AvailabilityState::Weekend => {
                "Roy will be back on the next working day.".to_string()
            }
            AvailabilityState::LunchBreak => format!(
                "Roy should be back by {} IST.",
                schedule.lunch_end.format("%H:%M")
            ),
            AvailabilityState::Available => {
                "Feel free to reach out to Roy directly.".to_string()
            }
            AvailabilityState::OutsideHours => format!(
                "Roy works {} IST, {}. Leave a message and Roy will get back to you.",
                format_hours(schedule),
                schedule.describe_days()
            ),
        }
    }

    /// Bootstrap text class used to color the status line
    pub fn style_class(&self) -> &'static str {
        match self {
            AvailabilityState::Available => "text-success",
            AvailabilityState::LunchBreak => "text-warning",
            _ => "text-danger",
        }
    }
}

impl fmt::Display for AvailabilityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityState::OnHoliday(name) => write!(f, "on_holiday({})", name),
            AvailabilityState::Weekend => write!(f, "weekend"),
            AvailabilityState::LunchBreak => write!(f, "lunch_break"),
            AvailabilityState::Available => write!(f, "available"),
            AvailabilityState::OutsideHours => write!(f, "outside_hours"),
        }
    }
}

/// "09:00 to 18:00"
pub fn format_hours(schedule: &WorkSchedule) -> String {
    format!(
        "{} to {}",
        schedule.start_time.format("%H:%M"),
        schedule.end_time.format("%H:%M")
    )
}
