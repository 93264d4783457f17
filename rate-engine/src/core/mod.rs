//! Core module - configuration
//!
//! - [`Config`] - rate engine configuration

pub mod config;

pub use config::Config;
