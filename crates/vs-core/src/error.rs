//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers the checks
//! that live next to the primitive types (clock and config validation).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("time step must be positive and finite, got {0}")]
    InvalidStep(f64),

    #[error("acceleration must be positive and finite, got {0}")]
    InvalidAcceleration(f64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `vs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
