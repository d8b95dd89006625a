//! Deterministic 2D analytic geometry on implicit line equations.
//!
//! Layout
//! - `geom2`: the kernel (`Vec2`, `Segment`, `LineCoefficients` and the
//!   queries over them) plus raw-coordinate overloads in `geom2::coords`.
//! - `cfg`: the process-wide calculation threshold and `GeomCfg`.
//! - `error`: `GeomError` for the validating `try_*` constructors.
//!
//! API Policy
//! - Kernel functions never fail. Degenerate input shows up as `NaN`, `inf`
//!   or `None`, never as an `Err` or a panic.
//! - Thresholded predicates come in pairs: `foo` reads the global threshold,
//!   `foo_eps` takes it explicitly.

pub mod api;
pub mod cfg;
pub mod error;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{calculation_threshold, set_calculation_threshold, GeomCfg};
pub use error::{GeomError, Result};
pub use geom2::{LineCoefficients, LineRelation, Segment, Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{
        calculation_threshold, reset_calculation_threshold, set_calculation_threshold, GeomCfg,
    };
    pub use crate::geom2::kernel::*;
    pub use crate::geom2::{LineCoefficients, Segment, Vec2};
}
