//! Forecast message rendering.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use super::model::WeatherResponse;

/// Format a unix timestamp as 12-hour wall-clock time at the given UTC offset.
///
/// Offsets outside ±24h are not representable and fall back to UTC.
pub fn format_local_time(timestamp: i64, utc_offset_secs: i32) -> String {
    let offset = FixedOffset::east_opt(utc_offset_secs).unwrap_or_else(|| Utc.fix());

    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(instant) => instant.with_timezone(&offset).format("%I:%M %p").to_string(),
        None => String::from("--:--"),
    }
}

/// Render the reply sentence for a successful weather response.
pub fn create_forecast_message(res: &WeatherResponse) -> String {
    let sunrise = format_local_time(res.sys.sunrise, res.timezone);
    let sunset = format_local_time(res.sys.sunset, res.timezone);

    format!(
        "The current weather in {name}, {country} is characterized by {description}, \
         with a temperature of {temp:.1}°C. The humidity level is {humidity}%, \
         and the wind speed is {wind:.1} m/s. \
         The sun will rise at {sunrise} and set at {sunset} local time.",
        name = res.name,
        country = res.sys.country,
        description = res.description(),
        temp = res.main.temp,
        humidity = res.main.humidity,
        wind = res.wind.speed,
    )
}
