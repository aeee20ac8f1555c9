//! Configuration module for environment variable parsing.
//!
//! All settings come from the hosting environment; nothing is read from disk.

use std::env;
use std::str::FromStr;
use tracing::warn;

/// Default OpenWeatherMap API root.
pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Base64-encoded shared secret of the Teams outgoing webhook
    pub teams_secret: Option<String>,

    /// OpenWeatherMap API key
    pub openweather_api_key: Option<String>,

    /// OpenWeatherMap API root, overridable for staging or stub servers
    pub openweather_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: parse_or("PORT", 8080),

            teams_secret: non_empty("MS_TEAMS_SECRET"),

            openweather_api_key: non_empty("OPEN_WEATHER_MAP_API_KEY"),

            openweather_base_url: non_empty("OPEN_WEATHER_MAP_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENWEATHER_BASE_URL.to_string()),
        }
    }
}

/// Parse a variable into `T`, falling back to `default` when unset or invalid.
fn parse_or<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn!(env_var = name, value = %raw, default = ?default, "Invalid value, using default");
            default
        }
    }
}

/// Read a variable, treating blank values as unset.
fn non_empty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
