/// Runtime configuration for the country-info tool.
use std::path::PathBuf;

/// Endpoint returning the full country list as a JSON array.
pub const DEFAULT_API_URL: &str = "https://restcountries.com/v3.1/all";

/// Append-only log file, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "country.log";

/// Explicit configuration object, passed to the client instead of being
/// read from globals at use sites.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub log_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let api_url = std::env::var("COUNTRY_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let log_path = std::env::var("COUNTRY_LOG_PATH")
            .unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
        Self {
            api_url,
            log_path: PathBuf::from(log_path),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}
