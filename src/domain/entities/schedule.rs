use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

/// India Standard Time (fixed UTC+5:30, no DST). All "now" calculations use it.
pub const IST: Tz = chrono_tz::Asia::Kolkata;

/// Working hours and days. Constant for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSchedule {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub work_days: Vec<Weekday>,
    pub lunch_start: NaiveTime,
    pub lunch_end: NaiveTime,
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self {
            start_time: hm(9, 0),
            end_time: hm(18, 0),
            work_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            lunch_start: hm(13, 0),
            lunch_end: hm(14, 0),
        }
    }
}

impl WorkSchedule {
    pub fn is_work_day(&self, day: Weekday) -> bool {
        self.work_days.contains(&day)
    }

    /// e.g. "Monday to Friday" or "Monday, Wednesday"
    pub fn describe_days(&self) -> String {
        let names: Vec<&str> = self.work_days.iter().map(|d| weekday_name(*d)).collect();

        let contiguous = self
            .work_days
            .windows(2)
            .all(|pair| pair[0].succ() == pair[1]);

        match names.as_slice() {
            [] => "no days".to_string(),
            [only] => only.to_string(),
            [first, .., last] if contiguous => format!("{} to {}", first, last),
            _ => names.join(", "),
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("literal work schedule time")
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Convert an instant to IST wall-clock time
pub fn to_ist(now: DateTime<Utc>) -> DateTime<Tz> {
    IST.from_utc_datetime(&now.naive_utc())
}

/// Calendar date of the instant in IST
pub fn ist_today(now: DateTime<Utc>) -> NaiveDate {
    to_ist(now).date_naive()
}
