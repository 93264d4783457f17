//! External collaborators
//!
//! Postal-zone computation and cubic/volume classification are owned by other
//! systems. Carriers receive them as injected trait objects; the stubs here
//! return fixed values for wiring and tests.

use shared::models::Shipment;
use std::fmt;

use super::error::RatingResult;

/// Postal zone identifier ("1", "2", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zone(String);

impl Zone {
    pub fn new(zone: impl Into<String>) -> Self {
        Self(zone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Volume (cubic) tier identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VolumeTier(String);

impl VolumeTier {
    pub fn new(tier: impl Into<String>) -> Self {
        Self(tier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VolumeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Zone lookup for a shipment
pub trait ZoneResolver: Send + Sync {
    fn zone(&self, shipment: &Shipment) -> RatingResult<Zone>;
}

/// Volume classification for a shipment
pub trait VolumeClassifier: Send + Sync {
    fn classify(&self, shipment: &Shipment) -> RatingResult<VolumeTier>;
}

impl<F> ZoneResolver for F
where
    F: Fn(&Shipment) -> RatingResult<Zone> + Send + Sync,
{
    fn zone(&self, shipment: &Shipment) -> RatingResult<Zone> {
        self(shipment)
    }
}

impl<F> VolumeClassifier for F
where
    F: Fn(&Shipment) -> RatingResult<VolumeTier> + Send + Sync,
{
    fn classify(&self, shipment: &Shipment) -> RatingResult<VolumeTier> {
        self(shipment)
    }
}

/// Zone resolver that always answers the same zone
#[derive(Debug, Clone)]
pub struct FixedZone(pub Zone);

impl FixedZone {
    pub fn new(zone: impl Into<String>) -> Self {
        Self(Zone::new(zone))
    }
}

impl ZoneResolver for FixedZone {
    fn zone(&self, _shipment: &Shipment) -> RatingResult<Zone> {
        Ok(self.0.clone())
    }
}

/// Volume classifier that always answers the same tier
#[derive(Debug, Clone)]
pub struct FixedVolumeTier(pub VolumeTier);

impl FixedVolumeTier {
    pub fn new(tier: impl Into<String>) -> Self {
        Self(VolumeTier::new(tier))
    }
}

impl VolumeClassifier for FixedVolumeTier {
    fn classify(&self, _shipment: &Shipment) -> RatingResult<VolumeTier> {
        Ok(self.0.clone())
    }
}
