use rate_engine::pricing::{
    CarrierRegistry, FixedVolumeTier, FixedZone, JsonFileSource, LaPostStrategy, QuoteAssembler,
    RateCardReloader, RateCardSource, UspsStrategy, bootstrap,
};
use rate_engine::{handle_quote_line, setup_environment};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env, config, logging)
    let config = setup_environment();
    tracing::info!(
        environment = %config.environment,
        rate_cards = %config.rate_cards_path,
        "Rate engine starting"
    );

    // 2. Initial rate cards (a broken file stops startup)
    let source: Arc<dyn RateCardSource> = Arc::new(JsonFileSource::new(&config.rate_cards_path));
    let cards = match bootstrap(source.as_ref()).await {
        Ok(cards) => cards,
        Err(e) => {
            tracing::error!(error_code = %e.code(), "Failed to load rate cards: {}", e);
            return Err(e.into());
        }
    };

    // 3. Carriers with fixed collaborators
    let carriers = CarrierRegistry::new()
        .with(UspsStrategy::new(
            Arc::new(FixedZone::new(&config.default_zone)),
            Arc::new(FixedVolumeTier::new(&config.default_volume_tier)),
        ))
        .with(LaPostStrategy::new(Arc::new(FixedZone::new(
            &config.default_zone,
        ))));
    let assembler = QuoteAssembler::new(cards.clone(), carriers);

    // 4. Background reload
    let shutdown = CancellationToken::new();
    let reloader = config.reload_interval().map(|interval| {
        tokio::spawn(RateCardReloader::new(source.clone(), cards, interval, shutdown.clone()).run())
    });
    if reloader.is_none() {
        tracing::info!("Rate card reloading disabled");
    }

    // 5. Serve quote requests from stdin until EOF or Ctrl+C
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl+C, shutting down");
                break;
            }
        };
        let Some(line) = line else {
            tracing::info!("Input closed, shutting down");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_quote_line(&assembler, &line);
        let mut out = serde_json::to_string(&response)?;
        out.push('\n');
        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await?;
    }

    shutdown.cancel();
    if let Some(handle) = reloader
        && let Err(e) = handle.await
    {
        tracing::error!("Rate card reloader task failed: {}", e);
    }

    tracing::info!("Rate engine stopped");
    Ok(())
}
