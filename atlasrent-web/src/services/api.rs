//! REST client for the rental backend.
//!
//! Each call is fire-and-once: no retries, no coalescing, no timeout beyond
//! the transport's own. This is the one layer where failures propagate to
//! the caller; pages render them as loading/error states.

use atlasrent_core::{BookingRecord, BookingRequest, BookingResponse, Vehicle};
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;

/// Backend host from the `API_BASE_URL` compile-time setting; empty means
/// same-origin relative URLs.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("")
}

fn url(path: &str) -> String {
    format!("{}{path}", api_base().trim_end_matches('/'))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("resource not found")]
    NotFound,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    /// Backend refusal carrying the user-facing `detail` message.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Translation key for the error state a page renders.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::NotFound => "errors.not_found",
            Self::Rejected(_) => "errors.rejected",
            Self::Network(_) | Self::Status(_) | Self::Decode(_) => "errors.network",
        }
    }
}

/// Error body the backend attaches to refusals.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

fn status_error(status: u16) -> ApiError {
    if status == 404 {
        ApiError::NotFound
    } else {
        ApiError::Status(status)
    }
}

#[allow(clippy::future_not_send)] // Wasm futures rely on browser fetch, which is not `Send`.
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = Request::get(&url(path))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    if !resp.ok() {
        return Err(status_error(resp.status()));
    }
    resp.json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Fetch the full vehicle catalog.
///
/// # Errors
/// Surfaces network, HTTP and decode failures for the view's error state.
#[allow(clippy::future_not_send)] // Wasm futures rely on browser fetch, which is not `Send`.
pub async fn fetch_cars() -> Result<Vec<Vehicle>, ApiError> {
    get_json("/api/cars").await
}

/// Fetch a single vehicle record.
///
/// # Errors
/// A missing id surfaces as [`ApiError::NotFound`], distinct from other
/// failures so the page can render its "vehicle not found" state.
#[allow(clippy::future_not_send)] // Wasm futures rely on browser fetch, which is not `Send`.
pub async fn fetch_car(id: &str) -> Result<Vehicle, ApiError> {
    get_json(&format!("/api/cars/{id}")).await
}

/// Submit a booking to the backend.
///
/// # Errors
/// Non-2xx replies are decoded for their `detail` field and surfaced as
/// [`ApiError::Rejected`]; everything else maps as usual.
#[allow(clippy::future_not_send)] // Wasm futures rely on browser fetch, which is not `Send`.
pub async fn create_booking(request: &BookingRequest) -> Result<BookingResponse, ApiError> {
    let resp = Request::post(&url("/api/bookings"))
        .json(request)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    if !resp.ok() {
        return Err(rejection(resp).await);
    }
    resp.json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[allow(clippy::future_not_send)] // Wasm futures rely on browser fetch, which is not `Send`.
async fn rejection(resp: Response) -> ApiError {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => ApiError::Rejected(body.detail),
        Err(_) => status_error(status),
    }
}

/// Administrative listing of stored bookings.
///
/// # Errors
/// Surfaces network, HTTP and decode failures.
#[allow(clippy::future_not_send)] // Wasm futures rely on browser fetch, which is not `Send`.
pub async fn fetch_bookings() -> Result<Vec<BookingRecord>, ApiError> {
    get_json("/api/bookings").await
}

/// Administrative lookup of one stored booking.
///
/// # Errors
/// A missing id surfaces as [`ApiError::NotFound`].
#[allow(clippy::future_not_send)] // Wasm futures rely on browser fetch, which is not `Send`.
pub async fn fetch_booking(id: &str) -> Result<BookingRecord, ApiError> {
    get_json(&format!("/api/bookings/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::{ApiError, api_base, status_error, url};

    #[test]
    fn same_origin_urls_by_default() {
        assert_eq!(api_base(), "");
        assert_eq!(url("/api/cars"), "/api/cars");
        assert_eq!(url("/api/cars/q8-2024"), "/api/cars/q8-2024");
    }

    #[test]
    fn missing_resources_map_to_not_found() {
        assert_eq!(status_error(404), ApiError::NotFound);
        assert_eq!(status_error(500), ApiError::Status(500));
    }

    #[test]
    fn message_keys_distinguish_not_found() {
        assert_eq!(ApiError::NotFound.message_key(), "errors.not_found");
        assert_eq!(
            ApiError::Network("offline".to_string()).message_key(),
            "errors.network"
        );
        assert_eq!(
            ApiError::Rejected("Car not available".to_string()).message_key(),
            "errors.rejected"
        );
    }
}
