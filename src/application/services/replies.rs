use crate::domain::entities::{format_hours, HolidayCalendar, HolidayEntry, WorkSchedule};

pub const NO_MORE_HOLIDAYS: &str = "There are no more holidays this year.";
pub const NO_PREVIOUS_HOLIDAY: &str = "There were no holidays earlier this year.";
pub const NO_HOLIDAYS_THIS_WEEK: &str = "No holidays this week. Roy is working as usual.";

pub fn next_holiday_reply(next: Option<&HolidayEntry>) -> String {
    match next {
        Some(entry) => format!(
            "The next holiday is {} on {}.",
            entry.name,
            entry.display_date()
        ),
        None => NO_MORE_HOLIDAYS.to_string(),
    }
}

pub fn previous_holiday_reply(previous: Option<&HolidayEntry>) -> String {
    match previous {
        Some(entry) => format!(
            "The last holiday was {} on {}.",
            entry.name,
            entry.display_date()
        ),
        None => NO_PREVIOUS_HOLIDAY.to_string(),
    }
}

pub fn this_week_reply(holidays: &[&HolidayEntry]) -> String {
    if holidays.is_empty() {
        return NO_HOLIDAYS_THIS_WEEK.to_string();
    }

    let lines: Vec<String> = holidays.iter().map(|entry| bullet(entry)).collect();
    format!("Holidays this week:\n{}", lines.join("\n"))
}

/// Full calendar: mandatory holidays first, then optional ones
pub fn holiday_listing(calendar: &HolidayCalendar) -> String {
    let mut sections = Vec::with_capacity(2);

    sections.push(section("📅 Mandatory holidays:", calendar.mandatory()));
    if !calendar.optional().is_empty() {
        sections.push(section("🎈 Optional holidays:", calendar.optional()));
    }

    sections.join("\n\n")
}

pub fn working_hours_reply(schedule: &WorkSchedule) -> String {
    format!(
        "Roy works {}, {} IST, with a lunch break from {} to {}.",
        schedule.describe_days(),
        format_hours(schedule),
        schedule.lunch_start.format("%H:%M"),
        schedule.lunch_end.format("%H:%M")
    )
}

fn section(title: &str, entries: &[HolidayEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n• none", title);
    }

    let lines: Vec<String> = entries.iter().map(bullet).collect();
    format!("{}\n{}", title, lines.join("\n"))
}

fn bullet(entry: &HolidayEntry) -> String {
    format!("• {} - {}", entry.display_date(), entry.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::HolidayTier;
    use chrono::NaiveDate;

    fn entry(y: i32, m: u32, d: u32, name: &str) -> HolidayEntry {
        HolidayEntry::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            name,
            HolidayTier::Mandatory,
        )
    }

    #[test]
    fn test_next_holiday_reply() {
        let holiday = entry(2025, 1, 14, "Makara Sankranti");
        assert_eq!(
            next_holiday_reply(Some(&holiday)),
            "The next holiday is Makara Sankranti on Tue, 14 Jan 2025."
        );
        assert_eq!(next_holiday_reply(None), NO_MORE_HOLIDAYS);
    }

    #[test]
    fn test_this_week_reply() {
        assert_eq!(this_week_reply(&[]), NO_HOLIDAYS_THIS_WEEK);

        let holiday = entry(2025, 8, 15, "Independence Day");
        let reply = this_week_reply(&[&holiday]);
        assert!(reply.starts_with("Holidays this week:"));
        assert!(reply.contains("Fri, 15 Aug 2025 - Independence Day"));
    }

    #[test]
    fn test_listing_has_both_tiers_in_order() {
        let calendar = HolidayCalendar::builtin().unwrap();
        let listing = holiday_listing(&calendar);

        let mandatory_at = listing.find("Mandatory holidays").unwrap();
        let optional_at = listing.find("Optional holidays").unwrap();
        assert!(mandatory_at < optional_at);
        assert!(listing.contains("New Year"));
        assert!(listing.contains("Good Friday"));
    }

    #[test]
    fn test_listing_without_optional_tier() {
        let calendar = HolidayCalendar::from_table(&[("2025-01-01", "New Year")], &[]).unwrap();
        let listing = holiday_listing(&calendar);
        assert!(!listing.contains("Optional"));
    }

    #[test]
    fn test_working_hours_reply() {
        assert_eq!(
            working_hours_reply(&WorkSchedule::default()),
            "Roy works Monday to Friday, 09:00 to 18:00 IST, with a lunch break from 13:00 to 14:00."
        );
    }
}
