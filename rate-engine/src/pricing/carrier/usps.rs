//! USPS rate keys
//!
//! Key formats follow the rate cards already in use:
//! - `flatrate`
//! - `priority-zone{zone}-{package}-30lb` / `-40lb`
//! - `priority-zone{zone}-cubic{tier}`
//! - `contains-alcohol`, `fuel-charge-zone{zone}`

use shared::models::Shipment;
use std::sync::Arc;

use super::{CarrierStrategy, RateKey, SurchargeKey};
use crate::pricing::collaborators::{VolumeClassifier, Zone, ZoneResolver};
use crate::pricing::error::RatingResult;

const SERVICE_FLATRATE: &str = "flatrate";
const SERVICE_PRIORITY: &str = "priority";

/// Upper bound (exclusive, pounds) of each priority weight tier
const WEIGHT_TIERS: [(f64, &str); 2] = [(30.0, "30lb"), (40.0, "40lb")];

pub struct UspsStrategy {
    zones: Arc<dyn ZoneResolver>,
    volumes: Arc<dyn VolumeClassifier>,
}

impl std::fmt::Debug for UspsStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UspsStrategy").finish_non_exhaustive()
    }
}

impl UspsStrategy {
    pub const CODE: &'static str = "USPS";

    pub fn new(zones: Arc<dyn ZoneResolver>, volumes: Arc<dyn VolumeClassifier>) -> Self {
        Self { zones, volumes }
    }
}

impl CarrierStrategy for UspsStrategy {
    fn carrier_code(&self) -> &'static str {
        Self::CODE
    }

    fn zone(&self, shipment: &Shipment) -> RatingResult<Zone> {
        self.zones.zone(shipment)
    }

    fn weight_tier_key(&self, shipment: &Shipment, zone: &Zone) -> Option<RateKey> {
        match shipment.service.as_str() {
            SERVICE_FLATRATE => Some(RateKey::new(SERVICE_FLATRATE)),
            SERVICE_PRIORITY => {
                let tier = WEIGHT_TIERS
                    .iter()
                    .find(|(limit, _)| shipment.weight < *limit)
                    .map(|(_, tier)| *tier);
                match tier {
                    Some(tier) => Some(RateKey::new(format!(
                        "priority-zone{zone}-{}-{tier}",
                        shipment.package
                    ))),
                    None => {
                        tracing::debug!(
                            weight = shipment.weight,
                            "Priority weight above heaviest tier, no weight rate"
                        );
                        None
                    }
                }
            }
            _ => None,
        }
    }

    fn volume_tier_key(&self, shipment: &Shipment, zone: &Zone) -> RatingResult<Option<RateKey>> {
        if shipment.service != SERVICE_PRIORITY {
            return Ok(None);
        }
        let tier = self.volumes.classify(shipment)?;
        Ok(Some(RateKey::new(format!("priority-zone{zone}-cubic{tier}"))))
    }

    fn surcharge_keys(&self, shipment: &Shipment, zone: &Zone) -> Vec<SurchargeKey> {
        let mut keys = Vec::with_capacity(2);
        if shipment.options.alcohol {
            keys.push(SurchargeKey::new(
                "Alcohol surcharge",
                RateKey::new("contains-alcohol"),
            ));
        }
        keys.push(SurchargeKey::new(
            "Fuel surcharge",
            RateKey::new(format!("fuel-charge-zone{zone}")),
        ));
        keys
    }
}
