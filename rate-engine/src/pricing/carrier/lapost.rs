//! LaPost rate keys
//!
//! Ground service is priced by zone only (`laground-zone{zone}`); there is no
//! cubic pricing. Pick-up/drop-off deliveries add `pudo-charge`.

use shared::models::Shipment;
use std::sync::Arc;

use super::{CarrierStrategy, RateKey, SurchargeKey};
use crate::pricing::collaborators::{Zone, ZoneResolver};
use crate::pricing::error::RatingResult;

const SERVICE_GROUND: &str = "laground";

pub struct LaPostStrategy {
    zones: Arc<dyn ZoneResolver>,
}

impl std::fmt::Debug for LaPostStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaPostStrategy").finish_non_exhaustive()
    }
}

impl LaPostStrategy {
    pub const CODE: &'static str = "LAPOST";

    pub fn new(zones: Arc<dyn ZoneResolver>) -> Self {
        Self { zones }
    }
}

impl CarrierStrategy for LaPostStrategy {
    fn carrier_code(&self) -> &'static str {
        Self::CODE
    }

    fn zone(&self, shipment: &Shipment) -> RatingResult<Zone> {
        self.zones.zone(shipment)
    }

    fn weight_tier_key(&self, shipment: &Shipment, zone: &Zone) -> Option<RateKey> {
        (shipment.service == SERVICE_GROUND)
            .then(|| RateKey::new(format!("{SERVICE_GROUND}-zone{zone}")))
    }

    fn volume_tier_key(&self, _shipment: &Shipment, _zone: &Zone) -> RatingResult<Option<RateKey>> {
        Ok(None)
    }

    fn surcharge_keys(&self, shipment: &Shipment, _zone: &Zone) -> Vec<SurchargeKey> {
        if shipment.options.pudo {
            vec![SurchargeKey::new("PUDO surcharge", RateKey::new("pudo-charge"))]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::collaborators::FixedZone;
    use shared::models::ShipmentOptions;

    fn lapost() -> LaPostStrategy {
        LaPostStrategy::new(Arc::new(FixedZone::new("1")))
    }

    #[test]
    fn test_ground_key() {
        let shipment = Shipment::new("LAPOST", "laground", "box", 3.0);
        let strategy = lapost();
        let zone = strategy.zone(&shipment).unwrap();

        assert_eq!(
            strategy.weight_tier_key(&shipment, &zone),
            Some(RateKey::new("laground-zone1"))
        );
        assert_eq!(strategy.volume_tier_key(&shipment, &zone).unwrap(), None);
    }

    #[test]
    fn test_other_services_unpriced() {
        let shipment = Shipment::new("LAPOST", "express", "box", 3.0);
        let keys = lapost().candidate_keys(&shipment, &Zone::new("1")).unwrap();
        assert_eq!(keys.weight, None);
        assert_eq!(keys.volume, None);
    }

    #[test]
    fn test_pudo_surcharge() {
        let zone = Zone::new("1");
        let home = Shipment::new("LAPOST", "laground", "box", 3.0);
        let pudo = home.clone().with_options(ShipmentOptions {
            pudo: true,
            ..Default::default()
        });

        assert!(lapost().surcharge_keys(&home, &zone).is_empty());
        assert_eq!(
            lapost().surcharge_keys(&pudo, &zone),
            vec![SurchargeKey::new("PUDO surcharge", RateKey::new("pudo-charge"))]
        );
    }
}
