//! Rate Engine - shipping rate resolution
//!
//! # Overview
//!
//! Prices a shipment against a layered rate-card hierarchy:
//!
//! - **Rate cards** (`pricing::store`): validated immutable sets, swapped atomically on reload
//! - **Resolution** (`pricing::resolver`): base-card fallback and discount overrides
//! - **Carriers** (`pricing::carrier`): per-carrier rate keys and surcharges
//! - **Quotes** (`pricing::assembler`): cheaper of weight/cubic pricing plus surcharges
//!
//! # Module layout
//!
//! ```text
//! rate-engine/src/
//! ├── core/          # configuration
//! ├── pricing/       # rate resolution engine
//! ├── api.rs         # JSON-lines quote requests
//! └── utils/         # logging
//! ```

pub mod api;
pub mod core;
pub mod pricing;
pub mod utils;

pub use api::{QuoteRequest, handle_quote, handle_quote_line};
pub use crate::core::Config;
pub use pricing::{QuoteAssembler, RatingError, RatingResult};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Config {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );

    if dotenv_loaded {
        tracing::debug!("Loaded .env file");
    }
    config
}
