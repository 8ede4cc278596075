//! Booking submission strategies.
//!
//! One "submit booking" capability with two named flows: hand the composed
//! message to WhatsApp (the default) or POST the draft to the rental
//! backend. The active flow is a compile-time setting so a single booking
//! page serves both without duplicate implementations.

use atlasrent_core::{
    BookingDraft, BookingRequest, BookingResponse, DraftError, Lang, Quote, Vehicle, compose_booking,
    site,
};
use thiserror::Error;

use super::api::{self, ApiError};
use super::whatsapp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingFlow {
    /// Compose the WhatsApp message and open the deep link.
    #[default]
    Messaging,
    /// POST the draft to `/api/bookings`.
    Backend,
}

impl BookingFlow {
    /// Active flow, from the `BOOKING_FLOW` compile-time setting.
    #[must_use]
    pub fn active() -> Self {
        Self::from_setting(option_env!("BOOKING_FLOW"))
    }

    fn from_setting(setting: Option<&str>) -> Self {
        match setting {
            Some("backend") => Self::Backend,
            _ => Self::Messaging,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] DraftError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Translation key for the inline form message.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::Invalid(err) => err.message_key(),
            Self::Api(err) => err.message_key(),
        }
    }
}

/// Messaging flow: validate the draft and build the prefilled deep link.
///
/// # Errors
/// Validation failures block the handoff locally.
pub fn messaging_handoff(
    vehicle: Option<&Vehicle>,
    draft: &BookingDraft,
    quote: &Quote,
    lang: Lang,
) -> Result<String, SubmitError> {
    draft.validate()?;
    let text = compose_booking(vehicle, draft, quote, lang);
    Ok(whatsapp::deep_link(site::WHATSAPP, &text))
}

/// Backend flow: validate the draft and submit it to `/api/bookings`.
///
/// # Errors
/// Validation failures never reach the network; backend refusals surface
/// with their `detail` message.
#[allow(clippy::future_not_send)] // Wasm futures rely on browser fetch, which is not `Send`.
pub async fn backend_submit(draft: &BookingDraft) -> Result<BookingResponse, SubmitError> {
    let request = BookingRequest::from_draft(draft)?;
    Ok(api::create_booking(&request).await?)
}
