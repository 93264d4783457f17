//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 1xxx: Rate card errors
/// - 2xxx: Rate resolution errors
/// - 3xxx: Quote errors
/// - 9xxx: System errors (and anything outside the known ranges)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Rate card errors (1xxx)
    RateCard,
    /// Rate resolution errors (2xxx)
    Resolution,
    /// Quote errors (3xxx)
    Quote,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::RateCard,
            2000..3000 => Self::Resolution,
            3000..4000 => Self::Quote,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::RateCard => "rate_card",
            Self::Resolution => "resolution",
            Self::Quote => "quote",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
