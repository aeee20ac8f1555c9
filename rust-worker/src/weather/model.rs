//! OpenWeatherMap current-weather payload.
//!
//! Every field defaults when absent so that provider error bodies such as
//! `{"cod":"404","message":"city not found"}` decode into the same type and
//! the caller can decide on `cod`.

use serde::{Deserialize, Deserializer};

/// `cod` value the provider sends on success.
pub const COD_OK: u16 = 200;

// =============================================================================
// Response Types
// =============================================================================

/// Body of `GET /weather`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeatherResponse {
    pub coord: Coord,
    pub weather: Vec<Condition>,
    pub base: String,
    pub main: MainReadings,
    pub visibility: u32,
    pub wind: Wind,
    pub clouds: Clouds,
    /// Observation time, unix seconds
    pub dt: i64,
    pub sys: Sys,
    /// Shift in seconds from UTC
    pub timezone: i32,
    pub id: i64,
    /// Location name
    pub name: String,
    /// Provider status code, sent as a number on success and a string on errors
    #[serde(deserialize_with = "deserialize_cod")]
    pub cod: u16,
    /// Error description, only present on failures
    pub message: Option<String>,
}

impl WeatherResponse {
    /// Whether the provider reported success.
    pub fn is_ok(&self) -> bool {
        self.cod == COD_OK
    }

    /// Description of the primary weather condition.
    pub fn description(&self) -> &str {
        self.weather
            .first()
            .map(|w| w.description.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MainReadings {
    /// Celsius with `units=metric`
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// hPa
    pub pressure: u32,
    /// Percent
    pub humidity: u8,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Wind {
    /// m/s with `units=metric`
    pub speed: f64,
    pub deg: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Clouds {
    pub all: u8,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sys {
    pub country: String,
    /// Unix seconds, UTC
    pub sunrise: i64,
    /// Unix seconds, UTC
    pub sunset: i64,
}

/// Accept `cod` as `200` or `"404"`. Unparseable values map to 0, which is
/// never a success.
fn deserialize_cod<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCod {
        Number(u16),
        Text(String),
    }

    Ok(match RawCod::deserialize(deserializer)? {
        RawCod::Number(n) => n,
        RawCod::Text(s) => s.trim().parse().unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_success_payload() {
        let json = r#"{
            "coord": {"lon": 24.9355, "lat": 60.1695},
            "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
            "base": "stations",
            "main": {"temp": 4.23, "feels_like": 1.02, "temp_min": 3.1, "temp_max": 5.0, "pressure": 1012, "humidity": 81},
            "visibility": 10000,
            "wind": {"speed": 4.12, "deg": 230},
            "clouds": {"all": 75},
            "dt": 1700000000,
            "sys": {"type": 2, "id": 2011913, "country": "FI", "sunrise": 1699942811, "sunset": 1699969520},
            "timezone": 7200,
            "id": 658225,
            "name": "Helsinki",
            "cod": 200
        }"#;

        let res: WeatherResponse = serde_json::from_str(json).unwrap();

        assert!(res.is_ok());
        assert_eq!(res.name, "Helsinki");
        assert_eq!(res.sys.country, "FI");
        assert_eq!(res.description(), "broken clouds");
        assert_eq!(res.main.humidity, 81);
        assert_eq!(res.timezone, 7200);
        assert!(res.message.is_none());
    }

    #[test]
    fn test_deserialize_error_payload() {
        let json = r#"{"cod": "404", "message": "city not found"}"#;

        let res: WeatherResponse = serde_json::from_str(json).unwrap();

        assert!(!res.is_ok());
        assert_eq!(res.cod, 404);
        assert_eq!(res.message.as_deref(), Some("city not found"));
        assert_eq!(res.description(), "");
    }

    #[test]
    fn test_deserialize_missing_cod() {
        let res: WeatherResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(res.cod, 0);
        assert!(!res.is_ok());
    }
}
