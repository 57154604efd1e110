//! Keyword-based routing of free-text questions.
//!
//! Routes are tried in [`ROUTE_ORDER`]; the first route whose patterns match
//! wins. Categories overlap ("is roy on leave next week" mentions both leave
//! and roy), so the order is part of the contract.

use std::sync::OnceLock;

use regex::Regex;

/// Which holiday question was asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayQuery {
    Next,
    Previous,
    ThisWeek,
    Listing,
}

/// Biographical topics, in match priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTopic {
    Identity,
    FullName,
    Email,
    Company,
    Team,
    Manager,
    PersonalInfo,
    WorkingHours,
}

impl ProfileTopic {
    pub const ALL: [ProfileTopic; 8] = [
        ProfileTopic::Identity,
        ProfileTopic::FullName,
        ProfileTopic::Email,
        ProfileTopic::Company,
        ProfileTopic::Team,
        ProfileTopic::Manager,
        ProfileTopic::PersonalInfo,
        ProfileTopic::WorkingHours,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            ProfileTopic::Identity => identity_pattern(),
            ProfileTopic::FullName => full_name_pattern(),
            ProfileTopic::Email => email_pattern(),
            ProfileTopic::Company => company_pattern(),
            ProfileTopic::Team => team_pattern(),
            ProfileTopic::Manager => manager_pattern(),
            ProfileTopic::PersonalInfo => personal_info_pattern(),
            ProfileTopic::WorkingHours => working_hours_pattern(),
        }
    }

    /// Generic words ("company", "team", "age") only count when the question
    /// is about Roy
    fn needs_roy_reference(&self) -> bool {
        matches!(
            self,
            ProfileTopic::Company | ProfileTopic::Team | ProfileTopic::PersonalInfo
        )
    }

    fn matches(&self, text: &str) -> bool {
        self.pattern().is_match(text)
            && (!self.needs_roy_reference() || roy_reference_pattern().is_match(text))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Holiday,
    Profile,
    Availability,
    Greeting,
    Offers,
    Web,
}

/// Evaluation order of routes. `Web` always matches.
pub const ROUTE_ORDER: [Route; 6] = [
    Route::Holiday,
    Route::Profile,
    Route::Availability,
    Route::Greeting,
    Route::Offers,
    Route::Web,
];

/// Classified question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Holiday(HolidayQuery),
    Profile(ProfileTopic),
    Availability,
    /// Canned greeting reply
    Greeting(&'static str),
    Offers,
    Web,
}

impl Intent {
    pub fn route(&self) -> Route {
        match self {
            Intent::Holiday(_) => Route::Holiday,
            Intent::Profile(_) => Route::Profile,
            Intent::Availability => Route::Availability,
            Intent::Greeting(_) => Route::Greeting,
            Intent::Offers => Route::Offers,
            Intent::Web => Route::Web,
        }
    }
}

/// Greeting keywords and replies; the first matching row wins
pub const GREETINGS: &[(&str, &str)] = &[
    ("good morning", "Good morning! How can I help you today?"),
    ("good afternoon", "Good afternoon! What would you like to know about Roy?"),
    ("good evening", "Good evening! What can I do for you?"),
    ("hello", "Hello! I'm Roy's assistant. Ask me about Roy's availability or holidays."),
    ("hi", "Hi there! How can I help you today?"),
    ("hey", "Hey! What would you like to know?"),
    ("thank you", "You're welcome! Happy to help."),
    ("thanks", "You're welcome! Happy to help."),
    ("bye", "Goodbye! Have a great day."),
];

#[derive(Debug, Clone, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a question. Total: anything unmatched goes to the web.
    pub fn classify(&self, query: &str) -> Intent {
        let text = normalize(query);

        ROUTE_ORDER
            .iter()
            .find_map(|route| self.match_route(*route, &text))
            .unwrap_or(Intent::Web)
    }

    fn match_route(&self, route: Route, text: &str) -> Option<Intent> {
        match route {
            Route::Holiday => holiday_pattern()
                .is_match(text)
                .then(|| Intent::Holiday(holiday_query(text))),
            Route::Profile => ProfileTopic::ALL
                .iter()
                .find(|topic| topic.matches(text))
                .map(|topic| Intent::Profile(*topic)),
            Route::Availability => availability_pattern()
                .is_match(text)
                .then_some(Intent::Availability),
            Route::Greeting => greeting_patterns()
                .iter()
                .find(|(pattern, _)| pattern.is_match(text))
                .map(|(_, reply)| Intent::Greeting(*reply)),
            Route::Offers => offers_pattern().is_match(text).then_some(Intent::Offers),
            Route::Web => Some(Intent::Web),
        }
    }
}

fn holiday_query(text: &str) -> HolidayQuery {
    if next_pattern().is_match(text) {
        HolidayQuery::Next
    } else if previous_pattern().is_match(text) {
        HolidayQuery::Previous
    } else if this_week_pattern().is_match(text) {
        HolidayQuery::ThisWeek
    } else {
        HolidayQuery::Listing
    }
}

/// Collapse whitespace and fold typographic apostrophes
fn normalize(query: &str) -> String {
    query
        .replace(['\u{2019}', '\u{2018}'], "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Patterns
// ============================================================================

fn holiday_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(holidays?|leaves?|vacations?|shut\s?downs?|day\s+off|days\s+off)\b")
            .expect("Invalid holiday regex")
    })
}

fn next_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\b(next|upcoming)\b").expect("Invalid next regex"))
}

fn previous_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)\b(last|previous)\b").expect("Invalid previous regex"))
}

fn this_week_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\bthis\s+week\b").expect("Invalid this-week regex"))
}

fn roy_reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)\b(roy|your|he|his|him)\b").expect("Invalid reference regex"))
}

fn identity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(who\s+is\s+roy|who's\s+roy|about\s+roy|introduce\s+roy|who\s+are\s+you)\b")
            .expect("Invalid identity regex")
    })
}

fn full_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(full\s+name|complete\s+name|surname|last\s+name)\b")
            .expect("Invalid full name regex")
    })
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)\b(e-?mail|mail\s+id)\b").expect("Invalid email regex"))
}

fn company_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(company|organi[sz]ation|employer|where\s+does\s+roy\s+work)\b")
            .expect("Invalid company regex")
    })
}

fn team_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\b(team|department)\b").expect("Invalid team regex"))
}

fn manager_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(manager|boss|reports?\s+to|reporting\s+to)\b")
            .expect("Invalid manager regex")
    })
}

fn personal_info_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)\b(phone|mobile|contact\s+number|address|salary|age|how\s+old|married|wife|husband|girlfriend|boyfriend|family|birthday|date\s+of\s+birth)\b",
        )
        .expect("Invalid personal info regex")
    })
}

fn working_hours_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)\b(working\s+hours|work\s+hours|office\s+hours|(work|working|office|shift)\s+timings?|when\s+does\s+roy\s+work)\b",
        )
        .expect("Invalid working hours regex")
    })
}

fn availability_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)\b(where\s+is\s+roy|where's\s+roy|is\s+roy\s+(working|available|free|busy|online|around|at\s+work|in(\s+the)?\s+office)|roy's\s+status|roy\s+status|status\s+of\s+roy|availability|can\s+i\s+(reach|call|meet|talk\s+to)\s+roy)\b",
        )
        .expect("Invalid availability regex")
    })
}

/// Compiled [`GREETINGS`], same order
fn greeting_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        GREETINGS
            .iter()
            .map(|(keyword, reply)| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword).replace(' ', r"\s+"));
                (Regex::new(&pattern).expect("Invalid greeting regex"), *reply)
            })
            .collect()
    })
}

fn offers_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(cards?|offers?|cash\s?back|discounts?|rewards?|coupons?|deals?)\b")
            .expect("Invalid offers regex")
    })
}
