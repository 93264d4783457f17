//! Rate resolution engine
//!
//! # Architecture
//!
//! ```text
//! QuoteAssembler::quote(shipment, card_id)
//!   → CarrierRegistry → Carrier (zone, candidate keys, surcharge keys)
//!   → RateResolver (card + base chain, discounts) over one RateCardSet snapshot
//!   → RateQuote (rounded charges, total, single currency)
//! ```
//!
//! Rate cards are published into [`SharedRateCards`] by [`bootstrap`] and the
//! [`RateCardReloader`].

pub mod assembler;
pub mod carrier;
pub mod collaborators;
pub mod error;
pub mod reloader;
pub mod resolver;
pub mod source;
pub mod store;

pub use assembler::QuoteAssembler;
pub use carrier::{
    CandidateKeys, Carrier, CarrierRegistry, CarrierStrategy, LaPostStrategy, PricingMethod,
    RateKey, SurchargeKey, UspsStrategy,
};
pub use collaborators::{
    FixedVolumeTier, FixedZone, VolumeClassifier, VolumeTier, Zone, ZoneResolver,
};
pub use error::{RatingError, RatingResult};
pub use reloader::{RateCardReloader, bootstrap};
pub use resolver::{RateResolver, ResolvedRate};
pub use source::{JsonFileSource, RateCardSource, StaticSource};
pub use store::{RateCardSet, SharedRateCards};
