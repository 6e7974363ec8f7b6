//! Common utilities shared across the directory crates.
//!
//! This crate provides:
//! - Unified error handling
//! - Configuration structures
//! - Tracing bootstrap

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
pub use telemetry::{config_filter, init_tracing};
