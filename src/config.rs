//! Build-time Configuration
//!
//! The app ships as a static wasm bundle, so settings are baked in at
//! compile time from environment variables:
//! - `CRUD_LIST_API_BASE_URL`: items service base URL
//! - `CRUD_LIST_LOG`: maximum log level (error, warn, info, debug, trace)

use std::str::FromStr;

use items_api::DEFAULT_BASE_URL;
use tracing::Level;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Read the values captured when the bundle was compiled
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CRUD_LIST_API_BASE_URL"),
            option_env!("CRUD_LIST_LOG"),
        )
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let log_level = log_level
            .and_then(|level| Level::from_str(level.trim()).ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base_url,
            log_level,
        }
    }
}
