//! Flat re-export surface mirroring the coordinate-pair API.
//!
//! Names follow the kernel; the raw-coordinate forms live under `coords`.

pub use crate::cfg::{
    calculation_threshold, reset_calculation_threshold, set_calculation_threshold, GeomCfg,
    DEFAULT_CALCULATION_THRESHOLD, MAX_CALCULATION_THRESHOLD, MIN_CALCULATION_THRESHOLD,
};
pub use crate::geom2::coords;
pub use crate::geom2::{
    are_two_lines_matching, are_two_lines_parallel, are_two_lines_perpendicular,
    are_two_vectors_collinear, are_two_vectors_perpendicular, between_point_and_line_distance,
    between_two_lines_angle, between_two_vectors_angle, line_coefficients,
    relative_to_line_point_location, two_lines_intersection_point, two_lines_relation,
    vector_angle, LineCoefficients, LineRelation, Segment, Vec2,
};
