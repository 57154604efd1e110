use crate::domain::errors::CalendarError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub serpapi_api_key: Option<String>,
    pub serpapi_base_url: String,
    pub duckduckgo_base_url: String,
    pub provider_timeout: Duration,
    pub holiday_calendar_path: Option<PathBuf>,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-3.5-turbo".to_string(),
            serpapi_api_key: None,
            serpapi_base_url: "https://serpapi.com".to_string(),
            duckduckgo_base_url: "https://api.duckduckgo.com".to_string(),
            provider_timeout: Duration::from_secs(10),
            holiday_calendar_path: None,
            otel_exporter_endpoint: None,
            service_name: "askroy".to_string(),
            metrics_port: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server_port = match var("SERVER_PORT") {
            Some(port) => port.trim().parse().map_err(|_| ConfigError::InvalidPort)?,
            None => defaults.server_port,
        };

        let provider_timeout = match var("PROVIDER_TIMEOUT_SECS") {
            Some(secs) => match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(secs)),
            },
            None => defaults.provider_timeout,
        };

        let metrics_port = match var("METRICS_PORT") {
            Some(port) => Some(port.trim().parse().map_err(|_| ConfigError::InvalidPort)?),
            None => None,
        };

        Ok(Config {
            server_host: var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            openai_api_key: var("OPENAI_API_KEY"),
            openai_base_url: var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_model: var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            serpapi_api_key: var("SERPAPI_API_KEY"),
            serpapi_base_url: var("SERPAPI_BASE_URL").unwrap_or(defaults.serpapi_base_url),
            duckduckgo_base_url: var("DUCKDUCKGO_BASE_URL")
                .unwrap_or(defaults.duckduckgo_base_url),
            provider_timeout,
            holiday_calendar_path: var("HOLIDAY_CALENDAR_PATH").map(PathBuf::from),
            otel_exporter_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT"),
            service_name: var("SERVICE_NAME").unwrap_or(defaults.service_name),
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid PROVIDER_TIMEOUT_SECS value: {0}")]
    InvalidTimeout(String),

    #[error("Failed to load holiday calendar: {0}")]
    Calendar(#[from] CalendarError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
