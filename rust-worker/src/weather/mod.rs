//! Weather lookup module.
//!
//! This module provides:
//! - The OpenWeatherMap response model
//! - An HTTP client for the current-weather endpoint
//! - Rendering of the reply sentence
//!
//! ## Flow
//!
//! ```text
//! LocationQuery → OpenWeatherClient::get_weather() → WeatherResponse → create_forecast_message()
//! ```

pub mod client;
pub mod format;
pub mod model;

pub use client::{OpenWeatherClient, WeatherError};
pub use format::{create_forecast_message, format_local_time};
pub use model::{WeatherResponse, COD_OK};
