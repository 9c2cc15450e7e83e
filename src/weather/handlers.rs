/**
 * Weather Proxy Handler
 *
 * This module implements the handler for GET /weather. It validates the
 * `city` query parameter and the configured API key, issues a single
 * outbound call to the weather provider, and relays the provider's JSON
 * body verbatim.
 *
 * # Failure Mapping
 *
 * - Missing/blank city or unset API key - 400, no outbound call
 * - Network failure, timeout, or non-success provider status - 500 with
 *   a generic body; the underlying failure is logged, not exposed
 */

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::server::state::AppState;

/// Query parameters for `GET /weather`
#[derive(Deserialize, Debug, Default)]
pub struct WeatherQuery {
    /// City name to look up
    pub city: Option<String>,
}

/// Weather proxy handler
///
/// # Errors
///
/// * `400 Bad Request` - if `city` is missing or blank after trimming,
///   or the API key is not configured; no outbound call is made
/// * `500 Internal Server Error` - on any network failure or non-success
///   provider status
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> Result<Response, ApiError> {
    let city = params.city.as_deref().map(str::trim).unwrap_or_default();
    if city.is_empty() {
        tracing::warn!("Weather request rejected: missing city parameter");
        return Err(ApiError::bad_request("city query parameter is required"));
    }

    let Some(api_key) = state.weather.api_key.as_deref() else {
        tracing::warn!("Weather request rejected: WEATHER_API_KEY is not set");
        return Err(ApiError::bad_request("weather API key is not configured"));
    };

    let response = state
        .http_client
        .get(&state.weather.base_url)
        .query(&[("q", city), ("appid", api_key), ("units", "metric")])
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Weather request for {:?} failed: {:?}", city, e);
            ApiError::Upstream
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("Weather provider returned {} for {:?}", status, city);
        return Err(ApiError::Upstream);
    }

    // Relay the provider body verbatim, no schema validation
    let body = response.bytes().await.map_err(|e| {
        tracing::error!("Failed to read weather provider response for {:?}: {:?}", city, e);
        ApiError::Upstream
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
