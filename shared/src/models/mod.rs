//! Data models
//!
//! Shapes exchanged with the rate-card data source and with callers.
//! JSON field names follow the rate-card feed (camelCase).

pub mod quote;
pub mod rate_card;
pub mod shipment;

// Re-exports
pub use quote::*;
pub use rate_card::*;
pub use shipment::*;
