//! Rate Card Store
//!
//! Validated, immutable rate-card sets and the shared handle that publishes
//! them. A set is checked once when it is built (duplicate ids, dangling or
//! cyclic base references, negative amounts); after that every lookup is a
//! plain read.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::models::{RateCard, RateEntry};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::error::{RatingError, RatingResult};

/// Immutable, validated collection of rate cards keyed by id
#[derive(Debug, Clone, Default)]
pub struct RateCardSet {
    cards: HashMap<String, RateCard>,
}

impl RateCardSet {
    /// Build a card set, rejecting configurations resolution could not handle
    pub fn new(cards: Vec<RateCard>) -> RatingResult<Self> {
        let mut by_id = HashMap::with_capacity(cards.len());
        for card in cards {
            if by_id.contains_key(&card.id) {
                return Err(RatingError::DuplicateRateCard(card.id));
            }
            by_id.insert(card.id.clone(), card);
        }

        for card in by_id.values() {
            check_amounts(card)?;
            if let Some(base_id) = &card.base_card_id
                && !by_id.contains_key(base_id)
            {
                return Err(RatingError::BaseCardNotFound {
                    card_id: card.id.clone(),
                    base_card_id: base_id.clone(),
                });
            }
        }

        check_acyclic(&by_id)?;

        Ok(Self { cards: by_id })
    }

    /// Find a card by exact id
    pub fn find_card(&self, card_id: &str) -> RatingResult<&RateCard> {
        self.cards
            .get(card_id)
            .ok_or_else(|| RatingError::CardNotFound(card_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn check_amounts(card: &RateCard) -> RatingResult<()> {
    for (key, entry) in &card.entries {
        if let RateEntry::Absolute { amount, .. } = entry
            && *amount < Decimal::ZERO
        {
            return Err(RatingError::NegativeAmount {
                card_id: card.id.clone(),
                key: key.clone(),
                amount: *amount,
            });
        }
    }
    Ok(())
}

/// Walk every base chain; a chain that revisits a card is a cycle
fn check_acyclic(cards: &HashMap<String, RateCard>) -> RatingResult<()> {
    let mut verified: HashSet<&str> = HashSet::new();

    for start in cards.keys() {
        let mut chain: Vec<&str> = Vec::new();
        let mut current = Some(start.as_str());

        while let Some(id) = current {
            if verified.contains(id) {
                break;
            }
            if let Some(pos) = chain.iter().position(|seen| *seen == id) {
                let mut cycle: Vec<String> = chain[pos..].iter().map(|s| s.to_string()).collect();
                cycle.push(id.to_string());
                return Err(RatingError::CyclicBaseChain { chain: cycle });
            }
            chain.push(id);
            current = cards.get(id).and_then(|c| c.base_card_id.as_deref());
        }

        verified.extend(chain);
    }

    Ok(())
}

/// Shared handle to the current rate-card snapshot
///
/// Readers take an `Arc` to the whole set and keep using it for the duration
/// of a quote; `publish` swaps the pointer, never the cards inside a set.
#[derive(Clone)]
pub struct SharedRateCards {
    current: Arc<RwLock<Arc<RateCardSet>>>,
}

impl std::fmt::Debug for SharedRateCards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRateCards")
            .field("cards_count", &self.current.read().len())
            .finish()
    }
}

impl SharedRateCards {
    pub fn new(set: RateCardSet) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(set))),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<RateCardSet> {
        self.current.read().clone()
    }

    /// Replace the current snapshot, returning the previous one
    pub fn publish(&self, set: RateCardSet) -> Arc<RateCardSet> {
        let next = Arc::new(set);
        std::mem::replace(&mut *self.current.write(), next)
    }
}

impl Default for SharedRateCards {
    fn default() -> Self {
        Self::new(RateCardSet::default())
    }
}
