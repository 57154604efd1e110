use crate::domain::errors::CalendarError;
use chrono::NaiveDate;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Built-in mandatory holidays (date in YYYY-MM-DD format)
pub const MANDATORY_HOLIDAYS_2025: &[(&str, &str)] = &[
    ("2025-01-01", "New Year"),
    ("2025-01-14", "Makara Sankranti"),
    ("2025-03-31", "Ramzan (Id-ul-Fitr)"),
    ("2025-05-01", "May Day"),
    ("2025-08-15", "Independence Day"),
    ("2025-08-27", "Ganesh Chaturthi"),
    ("2025-10-01", "Mahanavami / Ayudha Pooja"),
    ("2025-10-02", "Gandhi Jayanti / Vijayadashami"),
    ("2025-10-20", "Naraka Chaturdashi"),
    ("2025-12-25", "Christmas"),
];

/// Built-in optional holidays, listed for information only
pub const OPTIONAL_HOLIDAYS_2025: &[(&str, &str)] = &[
    ("2025-02-26", "Maha Shivaratri"),
    ("2025-03-30", "Ugadi"),
    ("2025-04-18", "Good Friday"),
    ("2025-06-07", "Bakrid"),
    ("2025-08-09", "Raksha Bandhan"),
    ("2025-10-22", "Balipadyami"),
    ("2025-11-01", "Kannada Rajyotsava"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayTier {
    Mandatory,
    Optional,
}

impl fmt::Display for HolidayTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayTier::Mandatory => write!(f, "mandatory"),
            HolidayTier::Optional => write!(f, "optional"),
        }
    }
}

/// Holiday calendar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayEntry {
    pub date: NaiveDate,
    pub name: String,
    pub tier: HolidayTier,
}

impl HolidayEntry {
    pub fn new(date: NaiveDate, name: impl Into<String>, tier: HolidayTier) -> Self {
        Self {
            date,
            name: name.into(),
            tier,
        }
    }

    /// Human-readable date, e.g. "Wed, 01 Jan 2025"
    pub fn display_date(&self) -> String {
        self.date.format("%a, %d %b %Y").to_string()
    }
}

/// Calendar file format: two maps of "YYYY-MM-DD" -> holiday name
#[derive(Debug, Deserialize)]
struct CalendarFile {
    #[serde(default, deserialize_with = "date_entries")]
    mandatory: Vec<(String, String)>,
    #[serde(default, deserialize_with = "date_entries")]
    optional: Vec<(String, String)>,
}

/// Every key/value pair of a JSON object in document order, repeated keys included
fn date_entries<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of dates to holiday names")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, String>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

/// Immutable holiday table, built once at startup.
///
/// Both tiers are kept sorted by date. A date may appear at most once per tier.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    mandatory: Vec<HolidayEntry>,
    optional: Vec<HolidayEntry>,
}

impl HolidayCalendar {
    /// Build the calendar shipped with the binary
    pub fn builtin() -> Result<Self, CalendarError> {
        Self::from_table(MANDATORY_HOLIDAYS_2025, OPTIONAL_HOLIDAYS_2025)
    }

    /// Build a calendar from (date, name) pairs, failing on the first bad date
    pub fn from_table(
        mandatory: &[(&str, &str)],
        optional: &[(&str, &str)],
    ) -> Result<Self, CalendarError> {
        Ok(Self {
            mandatory: parse_tier(mandatory.iter().copied(), HolidayTier::Mandatory)?,
            optional: parse_tier(optional.iter().copied(), HolidayTier::Optional)?,
        })
    }

    /// Parse a calendar from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self, CalendarError> {
        let file: CalendarFile = serde_json::from_str(json)?;

        Ok(Self {
            mandatory: parse_tier(
                file.mandatory.iter().map(|(d, n)| (d.as_str(), n.as_str())),
                HolidayTier::Mandatory,
            )?,
            optional: parse_tier(
                file.optional.iter().map(|(d, n)| (d.as_str(), n.as_str())),
                HolidayTier::Optional,
            )?,
        })
    }

    /// Load a calendar from a JSON file on disk
    pub fn from_json_file(path: &Path) -> Result<Self, CalendarError> {
        let json = std::fs::read_to_string(path).map_err(|source| CalendarError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn mandatory(&self) -> &[HolidayEntry] {
        &self.mandatory
    }

    pub fn optional(&self) -> &[HolidayEntry] {
        &self.optional
    }

    /// Mandatory holiday falling on the given date, if any
    pub fn mandatory_on(&self, date: NaiveDate) -> Option<&HolidayEntry> {
        self.mandatory
            .binary_search_by_key(&date, |entry| entry.date)
            .ok()
            .map(|idx| &self.mandatory[idx])
    }
}

fn parse_tier<'a>(
    rows: impl Iterator<Item = (&'a str, &'a str)>,
    tier: HolidayTier,
) -> Result<Vec<HolidayEntry>, CalendarError> {
    let mut entries = Vec::new();

    for (date_str, name) in rows {
        let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|e| {
            CalendarError::InvalidDate {
                date: date_str.to_string(),
                reason: e.to_string(),
            }
        })?;
        entries.push(HolidayEntry::new(date, name.trim(), tier));
    }

    entries.sort_by_key(|entry| entry.date);

    if let Some(pair) = entries.windows(2).find(|pair| pair[0].date == pair[1].date) {
        return Err(CalendarError::DuplicateDate {
            date: pair[1].date.to_string(),
            tier,
        });
    }

    Ok(entries)
}
