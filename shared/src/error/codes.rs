//! Unified error codes for the rate engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Rate card errors
//! - 2xxx: Rate resolution errors
//! - 3xxx: Quote errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so callers in any language
/// can branch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Rate card ====================
    /// Requested rate card id is not in the store
    RateCardNotFound = 1001,
    /// Two rate cards share the same id
    DuplicateRateCard = 1002,
    /// A rate card references a base card that does not exist
    BaseCardNotFound = 1003,
    /// The base-card references form a cycle
    CyclicBaseChain = 1004,
    /// An absolute rate entry carries a negative amount
    NegativeAmount = 1005,

    // ==================== 2xxx: Resolution ====================
    /// Rate key absent from the card and its whole base chain
    RateKeyNotFound = 2001,
    /// Discount entry without a resolvable base rate
    NoBaseRate = 2002,
    /// Discount fraction outside [0, 1)
    InvalidDiscount = 2003,

    // ==================== 3xxx: Quote ====================
    /// No weight-tier or volume-tier key for the shipment
    NoApplicableRate = 3001,
    /// Charges in one quote use different currencies
    CurrencyMismatch = 3002,
    /// No strategy registered for the shipment's carrier
    UnsupportedCarrier = 3003,
    /// Rate card belongs to a different carrier than the shipment
    CarrierMismatch = 3004,
    /// Quote total exceeds the representable amount range
    AmountOverflow = 3005,
    /// Zone resolver failed
    ZoneLookupFailed = 3101,
    /// Volume classifier failed
    VolumeLookupFailed = 3102,

    // ==================== 9xxx: System ====================
    /// Rate card data source failed
    DataSourceError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::InvalidFormat => "Invalid format",

            // Rate card
            ErrorCode::RateCardNotFound => "Rate card not found",
            ErrorCode::DuplicateRateCard => "Duplicate rate card id",
            ErrorCode::BaseCardNotFound => "Base rate card not found",
            ErrorCode::CyclicBaseChain => "Rate card base chain contains a cycle",
            ErrorCode::NegativeAmount => "Rate amount must not be negative",

            // Resolution
            ErrorCode::RateKeyNotFound => "Rate key not found",
            ErrorCode::NoBaseRate => "Discount has no base rate to apply to",
            ErrorCode::InvalidDiscount => "Discount must be in [0, 1)",

            // Quote
            ErrorCode::NoApplicableRate => "No applicable rate for shipment",
            ErrorCode::CurrencyMismatch => "Charges use inconsistent currencies",
            ErrorCode::UnsupportedCarrier => "Carrier is not supported",
            ErrorCode::CarrierMismatch => "Rate card belongs to another carrier",
            ErrorCode::AmountOverflow => "Quote total is out of range",
            ErrorCode::ZoneLookupFailed => "Zone lookup failed",
            ErrorCode::VolumeLookupFailed => "Volume classification failed",

            // System
            ErrorCode::DataSourceError => "Rate card data source error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            6 => Ok(ErrorCode::InvalidFormat),

            // Rate card
            1001 => Ok(ErrorCode::RateCardNotFound),
            1002 => Ok(ErrorCode::DuplicateRateCard),
            1003 => Ok(ErrorCode::BaseCardNotFound),
            1004 => Ok(ErrorCode::CyclicBaseChain),
            1005 => Ok(ErrorCode::NegativeAmount),

            // Resolution
            2001 => Ok(ErrorCode::RateKeyNotFound),
            2002 => Ok(ErrorCode::NoBaseRate),
            2003 => Ok(ErrorCode::InvalidDiscount),

            // Quote
            3001 => Ok(ErrorCode::NoApplicableRate),
            3002 => Ok(ErrorCode::CurrencyMismatch),
            3003 => Ok(ErrorCode::UnsupportedCarrier),
            3004 => Ok(ErrorCode::CarrierMismatch),
            3005 => Ok(ErrorCode::AmountOverflow),
            3101 => Ok(ErrorCode::ZoneLookupFailed),
            3102 => Ok(ErrorCode::VolumeLookupFailed),

            // System
            9002 => Ok(ErrorCode::DataSourceError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
