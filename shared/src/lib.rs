//! Shared types for the shipping rate engine
//!
//! Data shapes exchanged with collaborators and callers (rate cards,
//! shipments, quotes) plus the unified error code system.

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    Address, RateCard, RateCharge, RateEntry, RateQuote, Shipment, ShipmentOptions,
};
