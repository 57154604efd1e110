use thiserror::Error;

use super::entities::HolidayTier;

/// Failure while building the holiday calendar. Only raised at startup.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid holiday date '{date}': {reason}")]
    InvalidDate { date: String, reason: String },
    #[error("Duplicate {tier} holiday on {date}")]
    DuplicateDate { date: String, tier: HolidayTier },
    #[error("Failed to read holiday calendar {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed holiday calendar: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure talking to an external answer provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0} is not configured")]
    MissingApiKey(&'static str),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(err.to_string())
        } else if err.is_connect() {
            ProviderError::Connect(err.to_string())
        } else if err.is_decode() {
            ProviderError::Malformed(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = ProviderError::Http {
            status: 401,
            body: "invalid key".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 401: invalid key");
    }

    #[test]
    fn test_missing_key_message() {
        let err = ProviderError::MissingApiKey("OPENAI_API_KEY");
        assert_eq!(err.to_string(), "OPENAI_API_KEY is not configured");
    }

    #[test]
    fn test_duplicate_date_message() {
        let err = CalendarError::DuplicateDate {
            date: "2025-01-01".to_string(),
            tier: HolidayTier::Mandatory,
        };
        assert_eq!(err.to_string(), "Duplicate mandatory holiday on 2025-01-01");
    }
}
