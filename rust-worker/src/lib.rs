//! Teams Weather Bot - replies to bot mentions with the current weather.
//!
//! This library provides the modules behind the `weather-bot` binary:
//! - `config`: environment configuration
//! - `mention`: parsing `<at>Weather</at> City, CC` text
//! - `weather`: OpenWeatherMap client and reply rendering
//! - `web`: axum router, handlers, and signature verification
//!
//! ## Request Flow
//!
//! ```text
//! Teams → POST /weather → verify → parse → fetch → format → {type: "message", text}
//! ```

pub mod config;
pub mod mention;
pub mod weather;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use mention::{parse_city_and_country, LocationQuery};
pub use weather::{create_forecast_message, OpenWeatherClient, WeatherError, WeatherResponse};
pub use web::{router, AppState, WebhookError};
