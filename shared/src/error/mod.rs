//! Unified error system for the rate engine
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized numeric error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified response envelope for callers
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Rate card errors (lookup and load-time validation)
//! - 2xxx: Rate resolution errors
//! - 3xxx: Quote errors (carrier strategy and assembly)
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::RateCardNotFound)
//!     .with_detail("card_id", "SAS-Base");
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(1001));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
