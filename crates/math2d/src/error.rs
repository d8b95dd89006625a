//! Errors for the strict (`try_*`) constructors.
//!
//! The kernel itself never fails: degenerate input propagates as `NaN`,
//! `inf` or `None`. Only the opt-in validating entry points return these.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// The two defining points of a line coincide, so `A = B = C = 0`.
    #[error("degenerate line: defining points coincide at ({x}, {y})")]
    DegenerateLine { x: f64, y: f64 },

    #[error("non-finite coordinate in input")]
    NonFinite,

    #[error("calculation threshold {value} outside [{min}, {max}]")]
    ThresholdOutOfRange { value: f64, min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, GeomError>;
