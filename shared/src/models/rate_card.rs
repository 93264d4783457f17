//! Rate Card Model
//!
//! A rate card holds the tariff of one carrier account. Override cards only
//! list the rates that differ from their base card, either as an absolute
//! price or as a discount relative to the base.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Rate entry (tagged by shape in JSON: absolute price or relative discount)
///
/// An entry must be exactly one shape; `{"currency", "amount", "discount"}`
/// together, or unknown fields, fail to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RateEntry {
    /// Fixed price
    Absolute {
        currency: String,
        #[serde(with = "rust_decimal::serde::float")]
        amount: Decimal,
    },
    /// Fraction taken off the base card's amount for the same key (0.2 = 20% off)
    Discount {
        #[serde(with = "rust_decimal::serde::float")]
        discount: Decimal,
    },
}

/// Wire shape of an entry before it is classified
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRateEntry {
    currency: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    discount: Option<Decimal>,
}

impl TryFrom<RawRateEntry> for RateEntry {
    type Error = String;

    fn try_from(raw: RawRateEntry) -> Result<Self, Self::Error> {
        match (raw.currency, raw.amount, raw.discount) {
            (Some(currency), Some(amount), None) => Ok(Self::Absolute { currency, amount }),
            (None, None, Some(discount)) => Ok(Self::Discount { discount }),
            (_, _, Some(_)) => Err("rate entry mixes a discount with an absolute price".into()),
            _ => Err("rate entry needs either currency and amount, or discount".into()),
        }
    }
}

impl<'de> Deserialize<'de> for RateEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawRateEntry::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

impl RateEntry {
    pub fn absolute(currency: impl Into<String>, amount: Decimal) -> Self {
        Self::Absolute {
            currency: currency.into(),
            amount,
        }
    }

    pub fn discount(discount: Decimal) -> Self {
        Self::Discount { discount }
    }
}

/// Rate card entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    #[serde(rename = "rateCardId")]
    pub id: String,
    /// USPS, LAPOST, ...
    #[serde(rename = "carrierCode")]
    pub carrier_code: String,
    /// Card this one overrides (by id)
    #[serde(
        rename = "baseRateCardId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub base_card_id: Option<String>,
    /// Rate key -> entry
    #[serde(rename = "rates", default)]
    pub entries: HashMap<String, RateEntry>,
}

impl RateCard {
    pub fn new(id: impl Into<String>, carrier_code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            carrier_code: carrier_code.into(),
            base_card_id: None,
            entries: HashMap::new(),
        }
    }

    /// Set the base card this card overrides
    pub fn with_base(mut self, base_card_id: impl Into<String>) -> Self {
        self.base_card_id = Some(base_card_id.into());
        self
    }

    /// Add or replace an entry
    pub fn with_entry(mut self, key: impl Into<String>, entry: RateEntry) -> Self {
        self.entries.insert(key.into(), entry);
        self
    }

    pub fn entry(&self, key: &str) -> Option<&RateEntry> {
        self.entries.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_card_with_both_entry_shapes() {
        let json = r#"{
            "rateCardId": "Customer-1",
            "carrierCode": "USPS",
            "baseRateCardId": "SAS-Base",
            "rates": {
                "priority-zone2-package1-30lb": { "discount": 0.2 },
                "flatrate": { "currency": "USD", "amount": 15 }
            }
        }"#;

        let card: RateCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, "Customer-1");
        assert_eq!(card.base_card_id.as_deref(), Some("SAS-Base"));
        assert_eq!(
            card.entry("priority-zone2-package1-30lb"),
            Some(&RateEntry::discount(Decimal::new(2, 1)))
        );
        assert_eq!(
            card.entry("flatrate"),
            Some(&RateEntry::absolute("USD", Decimal::new(15, 0)))
        );
    }

    #[test]
    fn test_mixed_entry_is_rejected() {
        let mixed = r#"{ "currency": "USD", "amount": 5, "discount": 0.2 }"#;
        let err = serde_json::from_str::<RateEntry>(mixed).unwrap_err();
        assert!(err.to_string().contains("mixes a discount"));
    }

    #[test]
    fn test_incomplete_or_unknown_entries_are_rejected() {
        for json in [
            r#"{ "amount": 5 }"#,
            r#"{ "currency": "USD" }"#,
            r#"{}"#,
            r#"{ "discount": 0.2, "note": "legacy" }"#,
        ] {
            assert!(serde_json::from_str::<RateEntry>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn test_entry_serializes_untagged() {
        let json = serde_json::to_value(RateEntry::discount(Decimal::new(2, 1))).unwrap();
        assert_eq!(json, serde_json::json!({ "discount": 0.2 }));

        let json = serde_json::to_value(RateEntry::absolute("EU", Decimal::new(23, 2))).unwrap();
        assert_eq!(json, serde_json::json!({ "currency": "EU", "amount": 0.23 }));
    }

    #[test]
    fn test_card_without_base() {
        let json = r#"{ "rateCardId": "SAS-Base", "carrierCode": "USPS", "rates": {} }"#;
        let card: RateCard = serde_json::from_str(json).unwrap();
        assert!(card.base_card_id.is_none());
        assert!(card.entries.is_empty());

        let out = serde_json::to_string(&card).unwrap();
        assert!(!out.contains("baseRateCardId"));
    }

    #[test]
    fn test_builder() {
        let card = RateCard::new("c", "USPS")
            .with_base("b")
            .with_entry("fuel-charge-zone1", RateEntry::absolute("USD", Decimal::new(3, 0)));
        assert_eq!(card.base_card_id.as_deref(), Some("b"));
        assert!(card.entry("fuel-charge-zone1").is_some());
        assert!(card.entry("fuel-charge-zone2").is_none());
    }
}
