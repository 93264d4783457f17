//! Rate card sources
//!
//! Where rate cards come from is outside the engine; a source only has to
//! produce the raw cards, validation happens when they are turned into a
//! [`RateCardSet`](super::RateCardSet).

use async_trait::async_trait;
use shared::models::RateCard;
use std::path::PathBuf;

use super::error::{RatingError, RatingResult};

#[async_trait]
pub trait RateCardSource: Send + Sync {
    /// Load every rate card currently defined
    async fn load(&self) -> RatingResult<Vec<RateCard>>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// JSON array of rate cards on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RateCardSource for JsonFileSource {
    async fn load(&self) -> RatingResult<Vec<RateCard>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            RatingError::DataSource(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            RatingError::DataSource(format!("invalid rate cards in {}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory cards
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    cards: Vec<RateCard>,
}

impl StaticSource {
    pub fn new(cards: Vec<RateCard>) -> Self {
        Self { cards }
    }
}

#[async_trait]
impl RateCardSource for StaticSource {
    async fn load(&self) -> RatingResult<Vec<RateCard>> {
        Ok(self.cards.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} cards", self.cards.len())
    }
}
