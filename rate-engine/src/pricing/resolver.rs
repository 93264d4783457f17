//! Rate Resolver
//!
//! Resolves a rate key against a card and, transitively, its base cards:
//! - an absolute entry is returned as-is
//! - a discount entry is applied to the amount the base chain resolves for the same key
//! - a missing entry falls back to the base card
//!
//! Arithmetic stays in exact `Decimal`; rounding to money happens when a
//! charge is placed on a quote.

use rust_decimal::Decimal;
use shared::models::RateEntry;

use super::error::{RatingError, RatingResult};
use super::store::RateCardSet;

/// Amount resolved for a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRate {
    pub amount: Decimal,
    pub currency: String,
    /// Card whose entry produced the amount
    pub card_id: String,
}

/// Resolver over one rate-card snapshot
#[derive(Debug, Clone, Copy)]
pub struct RateResolver<'a> {
    cards: &'a RateCardSet,
}

impl<'a> RateResolver<'a> {
    pub fn new(cards: &'a RateCardSet) -> Self {
        Self { cards }
    }

    /// Resolve `key` on `card_id`
    pub fn resolve(&self, card_id: &str, key: &str) -> RatingResult<ResolvedRate> {
        match self.lookup(card_id, key)? {
            Some(rate) => {
                tracing::debug!(
                    card_id,
                    key,
                    amount = %rate.amount,
                    currency = %rate.currency,
                    source_card = %rate.card_id,
                    "Resolved rate"
                );
                Ok(rate)
            }
            None => Err(RatingError::RateKeyNotFound {
                card_id: card_id.to_string(),
                key: key.to_string(),
            }),
        }
    }

    /// Resolve through the base chain; `None` when no card in the chain has the key
    fn lookup(&self, card_id: &str, key: &str) -> RatingResult<Option<ResolvedRate>> {
        let card = self.cards.find_card(card_id)?;

        match card.entry(key) {
            Some(RateEntry::Absolute { currency, amount }) => Ok(Some(ResolvedRate {
                amount: *amount,
                currency: currency.clone(),
                card_id: card.id.clone(),
            })),
            Some(RateEntry::Discount { discount }) => {
                if *discount < Decimal::ZERO || *discount >= Decimal::ONE {
                    return Err(RatingError::InvalidDiscount {
                        card_id: card.id.clone(),
                        key: key.to_string(),
                        discount: *discount,
                    });
                }

                let no_base = || RatingError::NoBaseRate {
                    card_id: card.id.clone(),
                    key: key.to_string(),
                };
                let base_id = card.base_card_id.as_deref().ok_or_else(no_base)?;
                let base = self.lookup(base_id, key)?.ok_or_else(no_base)?;

                Ok(Some(ResolvedRate {
                    amount: base.amount * (Decimal::ONE - *discount),
                    currency: base.currency,
                    card_id: card.id.clone(),
                }))
            }
            None => match card.base_card_id.as_deref() {
                Some(base_id) => self.lookup(base_id, key),
                None => Ok(None),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::RateCard;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn usd(amount: &str) -> RateEntry {
        RateEntry::absolute("USD", dec(amount))
    }

    fn off(fraction: &str) -> RateEntry {
        RateEntry::discount(dec(fraction))
    }

    fn sample_set() -> RateCardSet {
        RateCardSet::new(vec![
            RateCard::new("SAS-Base", "USPS")
                .with_entry("priority-zone2-package1-30lb", usd("34.09"))
                .with_entry("priority-zone1-package2-30lb", usd("34.09"))
                .with_entry("flatrate", usd("34"))
                .with_entry("contains-alcohol", usd("3"))
                .with_entry("fuel-charge-zone1", usd("3")),
            RateCard::new("Customer-Carrier-23423423", "USPS")
                .with_base("SAS-Base")
                .with_entry("priority-zone2-package1-30lb", off("0.2"))
                .with_entry("priority-zone1-package2-30lb", off("0.23"))
                .with_entry("flatrate", usd("15"))
                .with_entry("contains-alcohol", usd("0"))
                .with_entry("only-here", off("0.1")),
            RateCard::new("Orphan", "USPS").with_entry("flatrate", off("0.1")),
        ])
        .unwrap()
    }

    #[test]
    fn test_absolute_entry_returned_exactly() {
        let set = sample_set();
        let resolver = RateResolver::new(&set);

        let rate = resolver.resolve("SAS-Base", "flatrate").unwrap();
        assert_eq!(rate.amount, dec("34"));
        assert_eq!(rate.currency, "USD");
        assert_eq!(rate.card_id, "SAS-Base");
    }

    #[test]
    fn test_override_absolute_wins_over_base() {
        let set = sample_set();
        let resolver = RateResolver::new(&set);

        let rate = resolver
            .resolve("Customer-Carrier-23423423", "flatrate")
            .unwrap();
        assert_eq!(rate.amount, dec("15"));

        let waived = resolver
            .resolve("Customer-Carrier-23423423", "contains-alcohol")
            .unwrap();
        assert_eq!(waived.amount, Decimal::ZERO);
    }

    #[test]
    fn test_discount_applies_to_base_amount() {
        let set = sample_set();
        let resolver = RateResolver::new(&set);

        let rate = resolver
            .resolve("Customer-Carrier-23423423", "priority-zone2-package1-30lb")
            .unwrap();
        assert_eq!(rate.amount, dec("34.09") * (Decimal::ONE - dec("0.2")));
        assert_eq!(rate.amount, dec("27.272"));
        assert_eq!(rate.currency, "USD");

        let rate = resolver
            .resolve("Customer-Carrier-23423423", "priority-zone1-package2-30lb")
            .unwrap();
        assert_eq!(rate.amount, dec("26.2493"));
    }

    #[test]
    fn test_missing_entry_falls_back_to_base() {
        let set = sample_set();
        let resolver = RateResolver::new(&set);

        let rate = resolver
            .resolve("Customer-Carrier-23423423", "fuel-charge-zone1")
            .unwrap();
        assert_eq!(rate.amount, dec("3"));
        assert_eq!(rate.card_id, "SAS-Base");
    }

    #[test]
    fn test_missing_everywhere_is_rate_key_not_found() {
        let set = sample_set();
        let resolver = RateResolver::new(&set);

        let err = resolver
            .resolve("Customer-Carrier-23423423", "fuel-charge-zone9")
            .unwrap_err();
        assert_eq!(
            err,
            RatingError::RateKeyNotFound {
                card_id: "Customer-Carrier-23423423".into(),
                key: "fuel-charge-zone9".into(),
            }
        );
    }

    #[test]
    fn test_unknown_card() {
        let set = sample_set();
        let resolver = RateResolver::new(&set);

        assert_eq!(
            resolver.resolve("nope", "flatrate").unwrap_err(),
            RatingError::CardNotFound("nope".into())
        );
    }

    #[test]
    fn test_discount_without_base_card() {
        let set = sample_set();
        let resolver = RateResolver::new(&set);

        assert_eq!(
            resolver.resolve("Orphan", "flatrate").unwrap_err(),
            RatingError::NoBaseRate {
                card_id: "Orphan".into(),
                key: "flatrate".into(),
            }
        );
    }

    #[test]
    fn test_discount_when_base_lacks_key() {
        let set = sample_set();
        let resolver = RateResolver::new(&set);

        assert_eq!(
            resolver
                .resolve("Customer-Carrier-23423423", "only-here")
                .unwrap_err(),
            RatingError::NoBaseRate {
                card_id: "Customer-Carrier-23423423".into(),
                key: "only-here".into(),
            }
        );
    }

    #[test]
    fn test_discount_bounds() {
        let set = RateCardSet::new(vec![
            RateCard::new("base", "USPS").with_entry("k", usd("10")),
            RateCard::new("full", "USPS").with_base("base").with_entry("k", off("1.0")),
            RateCard::new("over", "USPS").with_base("base").with_entry("k", off("1.5")),
            RateCard::new("negative", "USPS").with_base("base").with_entry("k", off("-0.1")),
            RateCard::new("zero", "USPS").with_base("base").with_entry("k", off("0")),
        ])
        .unwrap();
        let resolver = RateResolver::new(&set);

        for card in ["full", "over", "negative"] {
            assert!(matches!(
                resolver.resolve(card, "k").unwrap_err(),
                RatingError::InvalidDiscount { .. }
            ));
        }
        assert_eq!(resolver.resolve("zero", "k").unwrap().amount, dec("10"));
    }

    #[test]
    fn test_discount_chain_is_transitive() {
        let set = RateCardSet::new(vec![
            RateCard::new("base", "USPS").with_entry("k", RateEntry::absolute("EUR", dec("100"))),
            RateCard::new("mid", "USPS").with_base("base").with_entry("k", off("0.1")),
            RateCard::new("top", "USPS").with_base("mid").with_entry("k", off("0.5")),
            RateCard::new("leaf", "USPS").with_base("top"),
        ])
        .unwrap();
        let resolver = RateResolver::new(&set);

        assert_eq!(resolver.resolve("mid", "k").unwrap().amount, dec("90"));
        assert_eq!(resolver.resolve("top", "k").unwrap().amount, dec("45"));

        let leaf = resolver.resolve("leaf", "k").unwrap();
        assert_eq!(leaf.amount, dec("45"));
        assert_eq!(leaf.currency, "EUR");
        assert_eq!(leaf.card_id, "top");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let set = sample_set();
        let resolver = RateResolver::new(&set);

        let first = resolver.resolve("Customer-Carrier-23423423", "priority-zone2-package1-30lb");
        let second = resolver.resolve("Customer-Carrier-23423423", "priority-zone2-package1-30lb");
        assert_eq!(first, second);
    }
}
