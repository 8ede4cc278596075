//! Booking drafts, validation and the backend wire forms.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// In-progress reservation request. Held only in view state; consumed once
/// by a submission strategy and then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub car_id: String,
    pub pickup_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub pickup_location: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("a required field is missing")]
    MissingRequiredField,
    #[error("return date precedes pickup date")]
    ReturnBeforePickup,
}

impl DraftError {
    /// Translation key for the inline form message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "booking.errors.missing_fields",
            Self::ReturnBeforePickup => "booking.errors.return_before_pickup",
        }
    }
}

impl BookingDraft {
    /// Validate the draft before any submission. Email stays optional: the
    /// messaging flow's rules are the canonical ones.
    ///
    /// # Errors
    ///
    /// Returns the first failed rule; validation failures never reach the
    /// network.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.full_name.trim().is_empty()
            || self.phone.trim().is_empty()
            || self.car_id.is_empty()
            || self.pickup_date.is_none()
            || self.return_date.is_none()
        {
            return Err(DraftError::MissingRequiredField);
        }
        if let (Some(pickup), Some(ret)) = (self.pickup_date, self.return_date)
            && ret < pickup
        {
            return Err(DraftError::ReturnBeforePickup);
        }
        Ok(())
    }
}

/// Wire form of a submitted booking, shaped as the backend expects it.
/// Dates travel as ISO-8601 midnight timestamps; the backend stores full
/// datetimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub car_id: String,
    pub pickup_date: String,
    pub return_date: String,
    pub pickup_location: String,
    pub message: String,
}

impl BookingRequest {
    /// Build the wire form from a draft, validating it first.
    ///
    /// # Errors
    ///
    /// Propagates [`BookingDraft::validate`] failures.
    pub fn from_draft(draft: &BookingDraft) -> Result<Self, DraftError> {
        draft.validate()?;
        let pickup = draft.pickup_date.ok_or(DraftError::MissingRequiredField)?;
        let ret = draft.return_date.ok_or(DraftError::MissingRequiredField)?;
        Ok(Self {
            full_name: draft.full_name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            car_id: draft.car_id.clone(),
            pickup_date: iso_midnight(pickup),
            return_date: iso_midnight(ret),
            pickup_location: draft.pickup_location.clone(),
            message: draft.message.clone(),
        })
    }
}

fn iso_midnight(date: NaiveDate) -> String {
    format!("{}T00:00:00Z", date.format("%Y-%m-%d"))
}

/// Backend acknowledgement for a created booking.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookingResponse {
    pub id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub message: String,
}

/// A stored booking as returned by the administrative listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub car_id: String,
    pub pickup_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    pub pickup_location: String,
    #[serde(default)]
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
