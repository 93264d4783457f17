//! Rate Quote Assembler
//!
//! Orchestrates one quote: carrier strategy → keys → resolver → itemized result.

use rust_decimal::{Decimal, RoundingStrategy};
use shared::models::{RateCharge, RateQuote, Shipment};

use super::carrier::{
    CandidateKeys, CarrierRegistry, CarrierStrategy, PricingMethod, normalize_carrier_code,
};
use super::error::{RatingError, RatingResult};
use super::resolver::{RateResolver, ResolvedRate};
use super::store::SharedRateCards;

/// Decimal places charges are rounded to on a quote
const MONEY_DP: u32 = 2;

/// Quote assembler over the shared rate cards and registered carriers
#[derive(Debug)]
pub struct QuoteAssembler {
    cards: SharedRateCards,
    carriers: CarrierRegistry,
}

impl QuoteAssembler {
    pub fn new(cards: SharedRateCards, carriers: CarrierRegistry) -> Self {
        Self { cards, carriers }
    }

    pub fn cards(&self) -> &SharedRateCards {
        &self.cards
    }

    /// Price `shipment` against rate card `card_id`
    ///
    /// One store snapshot is used for the whole quote, so a concurrent reload
    /// never mixes two card sets in one result.
    pub fn quote(&self, shipment: &Shipment, card_id: &str) -> RatingResult<RateQuote> {
        let carrier = self.carriers.get(&shipment.carrier_code)?;

        let snapshot = self.cards.snapshot();
        let card = snapshot.find_card(card_id)?;
        if normalize_carrier_code(&card.carrier_code) != normalize_carrier_code(carrier.carrier_code())
        {
            return Err(RatingError::CarrierMismatch {
                card_id: card.id.clone(),
                card_carrier: card.carrier_code.clone(),
                shipment_carrier: shipment.carrier_code.clone(),
            });
        }

        let resolver = RateResolver::new(&snapshot);
        let zone = carrier.zone(shipment)?;
        let candidates = carrier.candidate_keys(shipment, &zone)?;
        tracing::debug!(
            card_id,
            carrier = carrier.carrier_code(),
            zone = %zone,
            weight_key = ?candidates.weight,
            volume_key = ?candidates.volume,
            "Derived candidate rate keys"
        );

        let (method, primary) =
            select_primary(&resolver, card_id, &candidates)?.ok_or_else(|| {
                RatingError::NoApplicableRate {
                    carrier_code: shipment.carrier_code.clone(),
                    service: shipment.service.clone(),
                }
            })?;

        let mut charges = vec![(method.label().to_string(), primary)];
        for surcharge in carrier.surcharge_keys(shipment, &zone) {
            let rate = resolver.resolve(card_id, surcharge.key.as_str())?;
            charges.push((surcharge.name, rate));
        }

        let quote = build_quote(charges)?;
        tracing::info!(
            card_id,
            carrier = carrier.carrier_code(),
            service = %shipment.service,
            method = method.label(),
            total = %quote.total,
            currency = %quote.currency,
            "Quote assembled"
        );
        Ok(quote)
    }
}

/// Resolve the competing primary keys and pick the cheaper one
///
/// Amounts are compared as they will appear on the quote (rounded to money);
/// ties go to weight pricing.
fn select_primary(
    resolver: &RateResolver<'_>,
    card_id: &str,
    candidates: &CandidateKeys,
) -> RatingResult<Option<(PricingMethod, ResolvedRate)>> {
    let weight = candidates
        .weight
        .as_ref()
        .map(|key| resolver.resolve(card_id, key.as_str()))
        .transpose()?;
    let volume = candidates
        .volume
        .as_ref()
        .map(|key| resolver.resolve(card_id, key.as_str()))
        .transpose()?;

    let selected = match (weight, volume) {
        (Some(weight), Some(volume)) => {
            if weight.currency != volume.currency {
                return Err(RatingError::CurrencyMismatch {
                    charge: PricingMethod::Cubic.label().to_string(),
                    expected: weight.currency,
                    found: volume.currency,
                });
            }
            if to_money(volume.amount) < to_money(weight.amount) {
                Some((PricingMethod::Cubic, volume))
            } else {
                Some((PricingMethod::Weight, weight))
            }
        }
        (Some(weight), None) => Some((PricingMethod::Weight, weight)),
        (None, Some(volume)) => Some((PricingMethod::Cubic, volume)),
        (None, None) => None,
    };
    Ok(selected)
}

/// Round each charge to money, check the currency, sum the total
fn build_quote(charges: Vec<(String, ResolvedRate)>) -> RatingResult<RateQuote> {
    let currency = charges
        .first()
        .map(|(_, rate)| rate.currency.clone())
        .unwrap_or_default();

    let mut items = Vec::with_capacity(charges.len());
    let mut total = Decimal::ZERO;
    for (name, rate) in charges {
        if rate.currency != currency {
            return Err(RatingError::CurrencyMismatch {
                charge: name,
                expected: currency,
                found: rate.currency,
            });
        }
        let amount = to_money(rate.amount);
        total = total
            .checked_add(amount)
            .ok_or_else(|| RatingError::AmountOverflow {
                charge: name.clone(),
            })?;
        items.push(RateCharge::new(name, amount, rate.currency));
    }

    Ok(RateQuote {
        charges: items,
        total,
        currency,
    })
}

fn to_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}
