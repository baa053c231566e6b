//! Validation errors for the formatting entry points.

use thiserror::Error;

/// Raised by the public entry points before any computation. The argument
/// types already rule out non-text units and negative or fractional decimal
/// places, so the only runtime check left is on the number itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotationError {
    #[error("{function}: `number` must be finite, got {value}")]
    NonFinite { function: &'static str, value: f64 },
}
