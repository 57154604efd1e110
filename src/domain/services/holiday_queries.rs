use crate::domain::entities::{HolidayCalendar, HolidayEntry};
use chrono::{Datelike, Duration, NaiveDate};

/// First mandatory holiday strictly after `today`
pub fn next_holiday(today: NaiveDate, calendar: &HolidayCalendar) -> Option<&HolidayEntry> {
    calendar
        .mandatory()
        .iter()
        .filter(|entry| entry.date > today)
        .min_by_key(|entry| entry.date)
}

/// Last mandatory holiday strictly before `today`
pub fn previous_holiday(today: NaiveDate, calendar: &HolidayCalendar) -> Option<&HolidayEntry> {
    calendar
        .mandatory()
        .iter()
        .filter(|entry| entry.date < today)
        .max_by_key(|entry| entry.date)
}

/// Sunday closing the week that contains `today` (weeks start on Monday)
pub fn end_of_week(today: NaiveDate) -> NaiveDate {
    let weekday_index = today.weekday().num_days_from_monday() as i64;
    today + Duration::days(6 - weekday_index)
}

/// Mandatory holidays from `today` through the end of its week, ascending
pub fn this_week_holidays(today: NaiveDate, calendar: &HolidayCalendar) -> Vec<&HolidayEntry> {
    let last_day = end_of_week(today);

    let mut holidays: Vec<&HolidayEntry> = calendar
        .mandatory()
        .iter()
        .filter(|entry| entry.date >= today && entry.date <= last_day)
        .collect();
    holidays.sort_by_key(|entry| entry.date);
    holidays
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_of_week() {
        // Monday -> Sunday of the same week
        assert_eq!(end_of_week(date(2025, 8, 11)), date(2025, 8, 17));
        // Sunday is its own end of week
        assert_eq!(end_of_week(date(2025, 8, 17)), date(2025, 8, 17));
        // Crosses a month boundary
        assert_eq!(end_of_week(date(2025, 7, 30)), date(2025, 8, 3));
    }

    #[test]
    fn test_next_is_strictly_after_today() {
        let calendar = HolidayCalendar::builtin().unwrap();
        let next = next_holiday(date(2025, 8, 15), &calendar).unwrap();
        assert_eq!(next.name, "Ganesh Chaturthi");
    }

    #[test]
    fn test_previous_is_strictly_before_today() {
        let calendar = HolidayCalendar::builtin().unwrap();
        let previous = previous_holiday(date(2025, 8, 15), &calendar).unwrap();
        assert_eq!(previous.name, "May Day");
        assert!(previous_holiday(date(2025, 1, 1), &calendar).is_none());
    }

    #[test]
    fn test_this_week_includes_today() {
        let calendar = HolidayCalendar::builtin().unwrap();
        let week = this_week_holidays(date(2025, 8, 15), &calendar);
        assert_eq!(week.len(), 1);
        assert_eq!(week[0].name, "Independence Day");
    }

    #[test]
    fn test_this_week_ordered() {
        let calendar = HolidayCalendar::builtin().unwrap();
        // Monday 2025-09-29: Oct 1 and Oct 2 fall in this week
        let week = this_week_holidays(date(2025, 9, 29), &calendar);
        let names: Vec<&str> = week.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Mahanavami / Ayudha Pooja", "Gandhi Jayanti / Vijayadashami"]
        );
    }

    #[test]
    fn test_optional_holidays_ignored() {
        let calendar = HolidayCalendar::builtin().unwrap();
        // Good Friday (optional) is 2025-04-18
        assert!(this_week_holidays(date(2025, 4, 14), &calendar).is_empty());
    }
}
