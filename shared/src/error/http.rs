//! HTTP status code mapping for error codes
//!
//! The engine itself has no transport; this is the mapping a caller exposing
//! quotes over HTTP uses for the structured error envelope.

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::RateCardNotFound => StatusCode::NOT_FOUND,

            // 422 Unprocessable: the request is well-formed but cannot be priced
            Self::RateKeyNotFound
            | Self::NoBaseRate
            | Self::NoApplicableRate
            | Self::UnsupportedCarrier
            | Self::CarrierMismatch => StatusCode::UNPROCESSABLE_ENTITY,

            // 503 Service Unavailable (collaborator failures, caller may retry)
            Self::ZoneLookupFailed
            | Self::VolumeLookupFailed
            | Self::DataSourceError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal: broken rate data or configuration
            Self::DuplicateRateCard
            | Self::BaseCardNotFound
            | Self::CyclicBaseChain
            | Self::NegativeAmount
            | Self::InvalidDiscount
            | Self::CurrencyMismatch
            | Self::AmountOverflow => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request
            Self::InvalidFormat => StatusCode::BAD_REQUEST,
        }
    }
}
