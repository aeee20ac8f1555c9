//! Webhook endpoint handlers.
//!
//! The weather handler runs one linear pipeline per request:
//! 1. Verify the Teams signature over the raw body
//! 2. Parse the mention text into a city and country
//! 3. Fetch current weather from the provider
//! 4. Render and return the reply

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::mention::parse_city_and_country;
use crate::weather::{create_forecast_message, OpenWeatherClient};
use crate::web::error::{WebhookError, NOT_FOUND};
use crate::web::signature::verify_teams_signature;
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: OpenWeatherClient,
}

impl AppState {
    pub fn new(config: Config, weather: OpenWeatherClient) -> Self {
        Self {
            config: Arc::new(config),
            weather,
        }
    }
}

// =============================================================================
// Weather Webhook
// =============================================================================

/// Teams outgoing webhook activity.
///
/// Only the message text is used; the rest of the activity is ignored.
#[derive(Debug, Deserialize)]
pub struct TeamsMessage {
    pub text: String,
}

/// Reply rendered by Teams as a bot message.
#[derive(Debug, Serialize)]
pub struct MessageReply {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl MessageReply {
    pub fn message(text: String) -> Self {
        Self {
            kind: "message".to_string(),
            text,
        }
    }
}

/// Weather webhook endpoint.
///
/// The body is taken as raw bytes because the signature covers them exactly.
pub async fn weather_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MessageReply>, WebhookError> {
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());

    info!(
        body_length = body.len(),
        has_signature = authorization.is_some(),
        "weather_webhook_received"
    );

    if !verify_teams_signature(&body, authorization, state.config.teams_secret.as_deref()) {
        warn!("weather_webhook_signature_invalid");
        return Err(WebhookError::InvalidSignature);
    }

    let message: TeamsMessage = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "weather_webhook_body_invalid");
        WebhookError::Usage
    })?;

    let Some(query) = parse_city_and_country(&message.text) else {
        warn!(text = %message.text, "weather_webhook_unparsable_text");
        return Err(WebhookError::Usage);
    };

    info!(city = %query.city, country = ?query.country, "weather_webhook_parsed");

    let res = state.weather.get_weather(&query).await?;

    if !res.is_ok() {
        warn!(
            cod = res.cod,
            provider_message = ?res.message,
            city = %query.city,
            "weather_webhook_provider_error"
        );
        return Err(WebhookError::Provider { cod: res.cod });
    }

    let text = create_forecast_message(&res);

    info!(location = %res.name, country = %res.sys.country, "weather_webhook_replied");

    Ok(Json(MessageReply::message(text)))
}

// =============================================================================
// Fallback
// =============================================================================

/// Any other path or method.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND)
}
