//! Web server module for the Teams outgoing webhook.
//!
//! This module provides the HTTP surface of the bot:
//! - `POST /weather` answers a bot mention with the current weather
//! - Everything else, including other methods on `/weather`, is `404 Not Found!`

pub mod error;
pub mod handlers;
pub mod signature;

use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

pub use error::{WebhookError, ERROR_FETCHING_WEATHER, INVALID_SIGNATURE, NOT_FOUND, USAGE};
pub use handlers::{not_found, weather_webhook, AppState, MessageReply, TeamsMessage};
pub use signature::verify_teams_signature;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather", post(weather_webhook).fallback(not_found))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
