//! 2D analytic geometry on implicit line equations.
//!
//! Purpose
//! - Answer point/line/vector queries (coefficients, side of line, distance,
//!   intersection, parallel/matching/perpendicular tests, angles) with plain,
//!   stateless functions.
//! - Offer two calling conventions: `Vec2`/`Segment` values (`kernel`) and raw
//!   coordinates (`coords`). The latter delegates to the former.
//!
//! Numerics
//! - Lines are always reduced to `LineCoefficients` before any computation.
//! - Thresholded predicates read `cfg::calculation_threshold` unless the `_eps`
//!   variant is used.
//!
//! Code cross-refs: `types::{Vec2, Segment, LineCoefficients}`, `cfg::GeomCfg`

pub mod coords;
pub mod kernel;
mod types;

pub use kernel::{
    are_two_lines_matching, are_two_lines_matching_eps, are_two_lines_parallel,
    are_two_lines_parallel_eps, are_two_lines_perpendicular, are_two_lines_perpendicular_eps,
    are_two_vectors_collinear, are_two_vectors_collinear_eps, are_two_vectors_perpendicular,
    are_two_vectors_perpendicular_eps, between_point_and_line_distance, between_two_lines_angle,
    between_two_lines_angle_eps, between_two_vectors_angle, line_coefficients,
    relative_to_line_point_location, two_lines_intersection_point, two_lines_relation,
    two_lines_relation_eps, vector_angle, LineRelation,
};
pub use types::{LineCoefficients, Segment, Vec2};

#[cfg(test)]
mod data;
