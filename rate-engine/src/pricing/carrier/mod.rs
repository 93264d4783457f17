//! Carrier rate strategies
//!
//! Each carrier turns a shipment into rate keys its own way; all keys are then
//! resolved through the same carrier-agnostic [`RateResolver`](super::RateResolver).
//!
//! Adding a carrier means implementing [`CarrierStrategy`] and adding a
//! [`Carrier`] variant; the quote assembler never looks at carrier codes.

use enum_dispatch::enum_dispatch;
use shared::models::Shipment;
use std::collections::HashMap;
use std::fmt;

use super::collaborators::Zone;
use super::error::{RatingError, RatingResult};

mod lapost;
mod usps;

pub use lapost::LaPostStrategy;
pub use usps::UspsStrategy;

/// Key into a rate card's entries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RateKey(String);

impl RateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pricing method a primary charge was computed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingMethod {
    Weight,
    Cubic,
}

impl PricingMethod {
    /// Line-item name on the quote
    pub fn label(&self) -> &'static str {
        match self {
            PricingMethod::Weight => "Rate Weight",
            PricingMethod::Cubic => "Rate Cubic",
        }
    }
}

/// Competing primary rate keys for a shipment (either may be absent)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateKeys {
    pub weight: Option<RateKey>,
    pub volume: Option<RateKey>,
}

/// Surcharge line item name and the key its amount is resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurchargeKey {
    pub name: String,
    pub key: RateKey,
}

impl SurchargeKey {
    pub fn new(name: impl Into<String>, key: RateKey) -> Self {
        Self {
            name: name.into(),
            key,
        }
    }
}

/// Capability set every carrier provides
#[enum_dispatch]
pub trait CarrierStrategy {
    /// Carrier code this strategy prices ("USPS", "LAPOST")
    fn carrier_code(&self) -> &'static str;

    /// Postal zone of the shipment
    fn zone(&self, shipment: &Shipment) -> RatingResult<Zone>;

    /// Weight-tier key, `None` when weight pricing is unavailable
    fn weight_tier_key(&self, shipment: &Shipment, zone: &Zone) -> Option<RateKey>;

    /// Volume-tier key, `None` when cubic pricing is unavailable
    fn volume_tier_key(&self, shipment: &Shipment, zone: &Zone) -> RatingResult<Option<RateKey>>;

    /// Surcharges that apply to the shipment, in line-item order
    fn surcharge_keys(&self, shipment: &Shipment, zone: &Zone) -> Vec<SurchargeKey>;

    fn candidate_keys(&self, shipment: &Shipment, zone: &Zone) -> RatingResult<CandidateKeys> {
        Ok(CandidateKeys {
            weight: self.weight_tier_key(shipment, zone),
            volume: self.volume_tier_key(shipment, zone)?,
        })
    }
}

/// Carrier - dispatches to the concrete strategy
///
/// Uses enum_dispatch for static dispatch.
#[enum_dispatch(CarrierStrategy)]
#[derive(Debug)]
pub enum Carrier {
    Usps(UspsStrategy),
    LaPost(LaPostStrategy),
}

/// Strategies registered by carrier code (case-insensitive)
#[derive(Debug, Default)]
pub struct CarrierRegistry {
    carriers: HashMap<String, Carrier>,
}

impl CarrierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy under its carrier code, replacing any previous one
    pub fn register(&mut self, carrier: impl Into<Carrier>) -> Option<Carrier> {
        let carrier = carrier.into();
        let code = normalize_carrier_code(carrier.carrier_code());
        tracing::debug!(carrier = %code, "Registered carrier strategy");
        self.carriers.insert(code, carrier)
    }

    pub fn with(mut self, carrier: impl Into<Carrier>) -> Self {
        self.register(carrier);
        self
    }

    pub fn get(&self, carrier_code: &str) -> RatingResult<&Carrier> {
        self.carriers
            .get(&normalize_carrier_code(carrier_code))
            .ok_or_else(|| RatingError::UnsupportedCarrier(carrier_code.to_string()))
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }
}

/// Canonical form of a carrier code (trimmed, uppercase)
pub fn normalize_carrier_code(carrier_code: &str) -> String {
    carrier_code.trim().to_ascii_uppercase()
}
