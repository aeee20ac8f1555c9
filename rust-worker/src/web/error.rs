//! Webhook error responses.
//!
//! Each failure maps to a fixed status and body. Nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::weather::WeatherError;

/// Reply to a message the bot cannot parse.
pub const USAGE: &str = "usage: Mention the bot with the city name and country code (e.g. @Weather Helsinki,FI). Note that the country code is optional, but recommended to avoid ambiguity.";

pub const INVALID_SIGNATURE: &str = "Invalid signature";

pub const ERROR_FETCHING_WEATHER: &str = "Error fetching weather data";

pub const NOT_FOUND: &str = "Not Found!";

/// Errors terminating a webhook request.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("invalid signature")]
    InvalidSignature,

    #[error("unparsable message")]
    Usage,

    #[error("provider returned cod {cod}")]
    Provider { cod: u16 },

    #[error(transparent)]
    Internal(#[from] WeatherError),
}

/// Body of an unexpected failure.
#[derive(Debug, Serialize)]
pub struct InternalErrorBody {
    pub status: u16,
    pub error: &'static str,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        match self {
            WebhookError::InvalidSignature => {
                (StatusCode::UNAUTHORIZED, INVALID_SIGNATURE).into_response()
            }
            WebhookError::Usage => (StatusCode::BAD_REQUEST, USAGE).into_response(),
            WebhookError::Provider { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, ERROR_FETCHING_WEATHER).into_response()
            }
            WebhookError::Internal(e) => {
                error!(error = %e, "weather_webhook_internal_error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(InternalErrorBody {
                        status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                        error: "Internal Server Error",
                    }),
                )
                    .into_response()
            }
        }
    }
}
