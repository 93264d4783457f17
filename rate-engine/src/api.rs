//! Quote request handling
//!
//! One request per line:
//!
//! ```json
//! {"rateCardId": "SAS-Base", "shipment": {"carrierCode": "USPS", "service": "priority", "package": "package1", "weight": 25}}
//! ```
//!
//! Every request gets exactly one [`ApiResponse`] back, success or not.

use serde::{Deserialize, Serialize};
use shared::error::{ApiResponse, AppError};
use shared::models::{RateQuote, Shipment};

use crate::pricing::QuoteAssembler;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub rate_card_id: String,
    pub shipment: Shipment,
}

/// Quote a parsed request
pub fn handle_quote(assembler: &QuoteAssembler, request: &QuoteRequest) -> ApiResponse<RateQuote> {
    let result = assembler
        .quote(&request.shipment, &request.rate_card_id)
        .map_err(AppError::from);

    if let Err(e) = &result {
        tracing::warn!(
            rate_card_id = %request.rate_card_id,
            error_code = %e.code,
            "Quote failed: {}",
            e.message
        );
    }
    ApiResponse::from_result(result)
}

/// Parse and quote one request line
pub fn handle_quote_line(assembler: &QuoteAssembler, line: &str) -> ApiResponse<RateQuote> {
    match serde_json::from_str::<QuoteRequest>(line) {
        Ok(request) => handle_quote(assembler, &request),
        Err(e) => {
            tracing::warn!("Rejected malformed quote request: {}", e);
            AppError::invalid_format(format!("Invalid quote request: {e}")).into()
        }
    }
}
