//! Utilities
//!
//! - [`logger`] - tracing setup
//! - Error types re-exported from `shared::error`

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
