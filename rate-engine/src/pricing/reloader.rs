//! Rate card reloader
//!
//! Loads the initial snapshot at startup and then periodically republishes
//! whatever the source currently holds. A failed reload is logged and the
//! previous snapshot stays in place.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::error::RatingResult;
use super::source::RateCardSource;
use super::store::{RateCardSet, SharedRateCards};

/// Load and validate the initial rate cards (fails fast)
pub async fn bootstrap(source: &dyn RateCardSource) -> RatingResult<SharedRateCards> {
    let set = RateCardSet::new(source.load().await?)?;
    tracing::info!(
        source = %source.describe(),
        cards = set.len(),
        "Rate cards loaded"
    );
    Ok(SharedRateCards::new(set))
}

pub struct RateCardReloader {
    source: Arc<dyn RateCardSource>,
    cards: SharedRateCards,
    interval: Duration,
    shutdown: CancellationToken,
}

impl RateCardReloader {
    pub fn new(
        source: Arc<dyn RateCardSource>,
        cards: SharedRateCards,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            source,
            cards,
            interval,
            shutdown,
        }
    }

    /// Load, validate and publish once; returns the number of cards published
    pub async fn reload_once(&self) -> RatingResult<usize> {
        let set = RateCardSet::new(self.source.load().await?)?;
        let count = set.len();
        let previous = self.cards.publish(set);
        tracing::info!(
            source = %self.source.describe(),
            cards = count,
            previous_cards = previous.len(),
            "Rate cards reloaded"
        );
        Ok(count)
    }

    /// Reload every `interval` until shutdown
    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "Rate card reloader started"
        );

        // The initial snapshot came from `bootstrap`, first reload is one interval out
        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Rate card reloader received shutdown signal");
                    break;
                }
            }

            if let Err(e) = self.reload_once().await {
                tracing::warn!(
                    error_code = %e.code(),
                    "Rate card reload failed, keeping previous snapshot: {}",
                    e
                );
            }
        }

        tracing::info!("Rate card reloader stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::error::RatingError;
    use crate::pricing::source::{JsonFileSource, StaticSource};
    use shared::models::RateCard;

    const V1: &str = r#"[{"rateCardId":"v1","carrierCode":"USPS","rates":{}}]"#;
    const V2: &str = r#"[
        {"rateCardId":"v2","carrierCode":"USPS","rates":{}},
        {"rateCardId":"v2-child","carrierCode":"USPS","baseRateCardId":"v2","rates":{}}
    ]"#;
    const CYCLIC: &str = r#"[
        {"rateCardId":"a","carrierCode":"USPS","baseRateCardId":"b","rates":{}},
        {"rateCardId":"b","carrierCode":"USPS","baseRateCardId":"a","rates":{}}
    ]"#;

    fn reloader(path: &std::path::Path, cards: SharedRateCards) -> RateCardReloader {
        RateCardReloader::new(
            Arc::new(JsonFileSource::new(path)),
            cards,
            Duration::from_millis(10),
            CancellationToken::new(),
        )
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_invalid_cards() {
        let source = StaticSource::new(vec![RateCard::new("a", "USPS").with_base("missing")]);
        let err = bootstrap(&source).await.unwrap_err();
        assert!(matches!(err, RatingError::BaseCardNotFound { .. }));
    }

    #[tokio::test]
    async fn test_reload_publishes_new_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rate_cards.json");
        std::fs::write(&path, V1).unwrap();

        let cards = bootstrap(&JsonFileSource::new(&path)).await.unwrap();
        assert!(cards.snapshot().find_card("v1").is_ok());

        std::fs::write(&path, V2).unwrap();
        let count = reloader(&path, cards.clone()).reload_once().await.unwrap();

        assert_eq!(count, 2);
        assert!(cards.snapshot().find_card("v2-child").is_ok());
        assert!(cards.snapshot().find_card("v1").is_err());
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rate_cards.json");
        std::fs::write(&path, V1).unwrap();
        let cards = bootstrap(&JsonFileSource::new(&path)).await.unwrap();
        let reloader = reloader(&path, cards.clone());

        std::fs::write(&path, CYCLIC).unwrap();
        assert!(matches!(
            reloader.reload_once().await.unwrap_err(),
            RatingError::CyclicBaseChain { .. }
        ));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            reloader.reload_once().await.unwrap_err(),
            RatingError::DataSource(_)
        ));

        assert!(cards.snapshot().find_card("v1").is_ok());
    }

    #[tokio::test]
    async fn test_run_reloads_until_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rate_cards.json");
        std::fs::write(&path, V1).unwrap();
        let cards = bootstrap(&JsonFileSource::new(&path)).await.unwrap();

        let shutdown = CancellationToken::new();
        let reloader = RateCardReloader::new(
            Arc::new(JsonFileSource::new(&path)),
            cards.clone(),
            Duration::from_millis(10),
            shutdown.clone(),
        );
        let handle = tokio::spawn(reloader.run());

        std::fs::write(&path, V2).unwrap();
        for _ in 0..100 {
            if cards.snapshot().find_card("v2").is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(cards.snapshot().find_card("v2").is_ok());

        shutdown.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
    }
}
