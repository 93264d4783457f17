//! Rate Quote Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line item of a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCharge {
    /// "Rate Weight", "Rate Cubic", "Fuel surcharge", ...
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
}

impl RateCharge {
    pub fn new(name: impl Into<String>, amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            currency: currency.into(),
        }
    }
}

/// Priced, itemized result for one shipment
///
/// `total` is the sum of all charge amounts and every charge is in `currency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    pub charges: Vec<RateCharge>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub currency: String,
}

impl RateQuote {
    /// Find a charge by its line-item name
    pub fn charge(&self, name: &str) -> Option<&RateCharge> {
        self.charges.iter().find(|c| c.name == name)
    }
}
