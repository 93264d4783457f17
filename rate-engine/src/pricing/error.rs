use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Rating errors
///
/// Every failure of a quote is one of these; none is turned into a zero charge.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    // ========== Rate card store ==========
    #[error("Rate card not found: {0}")]
    CardNotFound(String),

    #[error("Duplicate rate card id: {0}")]
    DuplicateRateCard(String),

    #[error("Rate card {card_id} references unknown base card {base_card_id}")]
    BaseCardNotFound {
        card_id: String,
        base_card_id: String,
    },

    #[error("Rate card base chain forms a cycle: {}", .chain.join(" -> "))]
    CyclicBaseChain { chain: Vec<String> },

    #[error("Rate {key} on card {card_id} has negative amount {amount}")]
    NegativeAmount {
        card_id: String,
        key: String,
        amount: Decimal,
    },

    // ========== Resolution ==========
    #[error("Rate key {key} not found on card {card_id} or its base cards")]
    RateKeyNotFound { card_id: String, key: String },

    #[error("Discount for {key} on card {card_id} has no base rate")]
    NoBaseRate { card_id: String, key: String },

    #[error("Discount {discount} for {key} on card {card_id} is outside [0, 1)")]
    InvalidDiscount {
        card_id: String,
        key: String,
        discount: Decimal,
    },

    // ========== Quote ==========
    #[error("No applicable rate for {carrier_code} service {service}")]
    NoApplicableRate {
        carrier_code: String,
        service: String,
    },

    #[error("Charge {charge} is in {found}, quote currency is {expected}")]
    CurrencyMismatch {
        charge: String,
        expected: String,
        found: String,
    },

    #[error("Unsupported carrier: {0}")]
    UnsupportedCarrier(String),

    #[error("Rate card {card_id} belongs to {card_carrier}, shipment is {shipment_carrier}")]
    CarrierMismatch {
        card_id: String,
        card_carrier: String,
        shipment_carrier: String,
    },

    #[error("Quote total overflowed while adding charge {charge}")]
    AmountOverflow { charge: String },

    // ========== Collaborators ==========
    #[error("Zone lookup failed: {0}")]
    ZoneLookup(String),

    #[error("Volume classification failed: {0}")]
    VolumeLookup(String),

    #[error("Rate card source error: {0}")]
    DataSource(String),
}

impl RatingError {
    /// Stable error code for callers
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CardNotFound(_) => ErrorCode::RateCardNotFound,
            Self::DuplicateRateCard(_) => ErrorCode::DuplicateRateCard,
            Self::BaseCardNotFound { .. } => ErrorCode::BaseCardNotFound,
            Self::CyclicBaseChain { .. } => ErrorCode::CyclicBaseChain,
            Self::NegativeAmount { .. } => ErrorCode::NegativeAmount,
            Self::RateKeyNotFound { .. } => ErrorCode::RateKeyNotFound,
            Self::NoBaseRate { .. } => ErrorCode::NoBaseRate,
            Self::InvalidDiscount { .. } => ErrorCode::InvalidDiscount,
            Self::NoApplicableRate { .. } => ErrorCode::NoApplicableRate,
            Self::CurrencyMismatch { .. } => ErrorCode::CurrencyMismatch,
            Self::UnsupportedCarrier(_) => ErrorCode::UnsupportedCarrier,
            Self::CarrierMismatch { .. } => ErrorCode::CarrierMismatch,
            Self::AmountOverflow { .. } => ErrorCode::AmountOverflow,
            Self::ZoneLookup(_) => ErrorCode::ZoneLookupFailed,
            Self::VolumeLookup(_) => ErrorCode::VolumeLookupFailed,
            Self::DataSource(_) => ErrorCode::DataSourceError,
        }
    }
}

impl From<RatingError> for AppError {
    fn from(err: RatingError) -> Self {
        let code = err.code();
        let base = AppError::with_message(code, err.to_string());
        match err {
            RatingError::CardNotFound(card_id) | RatingError::DuplicateRateCard(card_id) => {
                base.with_detail("card_id", card_id)
            }
            RatingError::BaseCardNotFound {
                card_id,
                base_card_id,
            } => base
                .with_detail("card_id", card_id)
                .with_detail("base_card_id", base_card_id),
            RatingError::CyclicBaseChain { chain } => base.with_detail("chain", chain),
            RatingError::NegativeAmount {
                card_id,
                key,
                amount,
            } => base
                .with_detail("card_id", card_id)
                .with_detail("key", key)
                .with_detail("amount", amount.to_string()),
            RatingError::RateKeyNotFound { card_id, key }
            | RatingError::NoBaseRate { card_id, key } => {
                base.with_detail("card_id", card_id).with_detail("key", key)
            }
            RatingError::InvalidDiscount {
                card_id,
                key,
                discount,
            } => base
                .with_detail("card_id", card_id)
                .with_detail("key", key)
                .with_detail("discount", discount.to_string()),
            RatingError::NoApplicableRate {
                carrier_code,
                service,
            } => base
                .with_detail("carrier_code", carrier_code)
                .with_detail("service", service),
            RatingError::CurrencyMismatch {
                charge,
                expected,
                found,
            } => base
                .with_detail("charge", charge)
                .with_detail("expected", expected)
                .with_detail("found", found),
            RatingError::UnsupportedCarrier(carrier_code) => {
                base.with_detail("carrier_code", carrier_code)
            }
            RatingError::CarrierMismatch {
                card_id,
                card_carrier,
                shipment_carrier,
            } => base
                .with_detail("card_id", card_id)
                .with_detail("card_carrier", card_carrier)
                .with_detail("shipment_carrier", shipment_carrier),
            RatingError::AmountOverflow { charge } => base.with_detail("charge", charge),
            RatingError::ZoneLookup(_)
            | RatingError::VolumeLookup(_)
            | RatingError::DataSource(_) => {
                tracing::error!(error_code = %code, message = %base.message, "Collaborator error");
                base
            }
        }
    }
}

/// Result type for rating operations
pub type RatingResult<T> = Result<T, RatingError>;
