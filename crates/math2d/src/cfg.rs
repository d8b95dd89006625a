//! Calculation threshold: the epsilon every "is zero" test compares against.
//!
//! Policy
//! - One process-wide value, read by the plain predicates (`are_two_lines_parallel`
//!   and friends). The `_eps` variants take the threshold explicitly and never
//!   look at the global.
//! - Writes clamp to `[MIN_CALCULATION_THRESHOLD, MAX_CALCULATION_THRESHOLD]`.
//!   NaN writes are dropped.
//! - Storage is an `AtomicU64` holding the `f64` bits with relaxed ordering.
//!   Concurrent writers race; last write wins. Hosts that need a stable value
//!   across threads should pass a `GeomCfg` to the `_eps` variants instead.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::{GeomError, Result};

pub const DEFAULT_CALCULATION_THRESHOLD: f64 = 1e-23;
pub const MIN_CALCULATION_THRESHOLD: f64 = 0.0;
pub const MAX_CALCULATION_THRESHOLD: f64 = 1e-12;

// Bits of DEFAULT_CALCULATION_THRESHOLD (1e-23).
static THRESHOLD_BITS: AtomicU64 = AtomicU64::new(0x3B28_2DB3_4012_B251);

/// Current process-wide calculation threshold.
#[inline]
pub fn calculation_threshold() -> f64 {
    f64::from_bits(THRESHOLD_BITS.load(Ordering::Relaxed))
}

/// Set the process-wide calculation threshold and return the value actually stored.
///
/// Out-of-range values clamp to the nearest bound. NaN leaves the current value in place.
pub fn set_calculation_threshold(value: f64) -> f64 {
    if value.is_nan() {
        tracing::warn!("ignoring NaN calculation threshold");
        return calculation_threshold();
    }
    let clamped = clamp_threshold(value);
    if clamped != value {
        tracing::warn!(
            requested = value,
            stored = clamped,
            "calculation threshold clamped"
        );
    }
    let previous = f64::from_bits(THRESHOLD_BITS.swap(clamped.to_bits(), Ordering::Relaxed));
    if previous != clamped {
        tracing::debug!(previous, current = clamped, "calculation threshold changed");
    }
    clamped
}

/// Restore `DEFAULT_CALCULATION_THRESHOLD`.
pub fn reset_calculation_threshold() {
    set_calculation_threshold(DEFAULT_CALCULATION_THRESHOLD);
}

#[inline]
fn clamp_threshold(value: f64) -> f64 {
    if value > MAX_CALCULATION_THRESHOLD {
        MAX_CALCULATION_THRESHOLD
    } else if value < MIN_CALCULATION_THRESHOLD {
        MIN_CALCULATION_THRESHOLD
    } else {
        value
    }
}

/// Geometry configuration (tolerances).
///
/// A plain value for hosts that load settings from their own config files
/// or want a per-call threshold instead of the global one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeomCfg {
    pub calculation_threshold: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            calculation_threshold: DEFAULT_CALCULATION_THRESHOLD,
        }
    }
}

impl GeomCfg {
    /// Strict constructor: rejects NaN and out-of-range thresholds instead of clamping.
    pub fn try_new(calculation_threshold: f64) -> Result<Self> {
        if calculation_threshold.is_nan()
            || !(MIN_CALCULATION_THRESHOLD..=MAX_CALCULATION_THRESHOLD)
                .contains(&calculation_threshold)
        {
            return Err(GeomError::ThresholdOutOfRange {
                value: calculation_threshold,
                min: MIN_CALCULATION_THRESHOLD,
                max: MAX_CALCULATION_THRESHOLD,
            });
        }
        Ok(Self {
            calculation_threshold,
        })
    }

    /// Same clamping as `set_calculation_threshold`; NaN falls back to the default.
    pub fn clamped(calculation_threshold: f64) -> Self {
        if calculation_threshold.is_nan() {
            return Self::default();
        }
        Self {
            calculation_threshold: clamp_threshold(calculation_threshold),
        }
    }

    /// Snapshot of the process-wide threshold.
    pub fn current() -> Self {
        Self {
            calculation_threshold: calculation_threshold(),
        }
    }

    /// Make this configuration the process-wide one.
    pub fn install(&self) -> f64 {
        tracing::debug!(
            calculation_threshold = self.calculation_threshold,
            "installing geometry config"
        );
        set_calculation_threshold(self.calculation_threshold)
    }
}

/// Serializes tests that mutate the process-wide threshold.
#[cfg(test)]
pub(crate) static TEST_THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
