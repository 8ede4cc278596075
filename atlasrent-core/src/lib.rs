//! Atlas Rent core logic.
//!
//! Platform-agnostic catalog, filtering, pricing and booking logic for the
//! Atlas Rent front-end. No UI or browser dependencies live here; the web
//! crate renders on top of these types.

#![forbid(unsafe_code)]

pub mod booking;
pub mod catalog;
pub mod filter;
pub mod lang;
pub mod message;
pub mod quote;
pub mod site;

// Re-export commonly used types
pub use booking::{BookingDraft, BookingRecord, BookingRequest, BookingResponse, DraftError};
pub use catalog::{Descriptions, Fuel, Transmission, Vehicle};
pub use filter::{CategoryFilter, FilterCriteria, PriceBand, TransmissionFilter};
pub use lang::Lang;
pub use message::{compose_booking, compose_general_inquiry, compose_inquiry};
pub use quote::{Quote, quote};
