//! Shipment Model

use serde::{Deserialize, Serialize};

/// Postal address (carried through to collaborators, never validated here)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    /// Pick-up/drop-off point address
    pub is_pudo: bool,
}

/// Shipment options that trigger surcharges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentOptions {
    pub alcohol: bool,
    /// Pick-up/drop-off delivery
    pub pudo: bool,
}

/// Shipment to be rated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub carrier_code: String,
    /// Carrier service name, e.g. "priority", "flatrate"
    pub service: String,
    /// Package type, e.g. "package1"
    pub package: String,
    /// Weight in pounds
    pub weight: f64,
    #[serde(default)]
    pub from_address: Address,
    #[serde(default)]
    pub to_address: Address,
    #[serde(default)]
    pub options: ShipmentOptions,
}

impl Shipment {
    pub fn new(
        carrier_code: impl Into<String>,
        service: impl Into<String>,
        package: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            carrier_code: carrier_code.into(),
            service: service.into(),
            package: package.into(),
            weight,
            from_address: Address::default(),
            to_address: Address::default(),
            options: ShipmentOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ShipmentOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_addresses(mut self, from: Address, to: Address) -> Self {
        self.from_address = from;
        self.to_address = to;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_shipment() {
        let json = r#"{
            "carrierCode": "USPS",
            "service": "priority",
            "package": "package1",
            "weight": 25
        }"#;
        let shipment: Shipment = serde_json::from_str(json).unwrap();
        assert_eq!(shipment.carrier_code, "USPS");
        assert_eq!(shipment.weight, 25.0);
        assert_eq!(shipment.options, ShipmentOptions::default());
    }

    #[test]
    fn test_deserialize_options_and_address() {
        let json = r#"{
            "carrierCode": "LAPOST",
            "service": "laground",
            "package": "box",
            "weight": 2.5,
            "toAddress": { "city": "Lyon", "postalCode": "69001", "isPudo": true },
            "options": { "pudo": true }
        }"#;
        let shipment: Shipment = serde_json::from_str(json).unwrap();
        assert!(shipment.options.pudo);
        assert!(!shipment.options.alcohol);
        assert_eq!(shipment.to_address.postal_code, "69001");
        assert!(shipment.to_address.is_pudo);
    }
}
