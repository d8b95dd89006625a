//! Analytic 2D kernel over `Vec2` / `Segment`.
//!
//! Every line is reduced to `LineCoefficients` (A, B, C) and the query is answered
//! from those. Segments are treated as infinite lines.
//!
//! Tolerances
//! - Parallel / matching / perpendicular predicates compare against the
//!   calculation threshold (`cfg::calculation_threshold`) or an explicit `eps`
//!   in the `_eps` variants. Comparisons are strict: `|x| < eps`.
//! - `two_lines_intersection_point` uses exact zero for its determinant, so a
//!   pair can be "parallel" under the threshold and still intersect here.
//!
//! Degenerate input (coincident defining points, zero vectors) is not rejected;
//! results propagate as `NaN`/`inf` or follow the documented conventions.

use std::f64::consts::PI;

use crate::cfg::calculation_threshold;

use super::types::{LineCoefficients, Segment, Vec2};

const DEG_PER_RAD: f64 = 180.0 / PI;

/// Coefficients (A, B, C) of the line through `p1` and `p2`.
#[inline]
pub fn line_coefficients(p1: Vec2, p2: Vec2) -> LineCoefficients {
    LineCoefficients::through(p1, p2)
}

/// Two-term coefficients of a free vector: `A = y`, `B = -x`.
#[inline]
fn vector_coefficients(v: Vec2) -> (f64, f64) {
    (v.y, -v.x)
}

/// Angle of `v` to the positive X axis, in degrees within `[0, 360)`.
///
/// The zero vector has angle 0.
pub fn vector_angle(v: Vec2) -> f64 {
    let (x, y) = (v.x, v.y);
    if x == 0.0 {
        return if y > 0.0 {
            90.0
        } else if y < 0.0 {
            270.0
        } else {
            0.0
        };
    }
    let angle = (y / x).atan() * DEG_PER_RAD;
    if x > 0.0 && y >= 0.0 {
        // folds the -0.0 of `y == -0.0` into 0
        angle + 0.0
    } else if x < 0.0 {
        angle + 180.0
    } else {
        angle + 360.0
    }
}

/// Side of the directed line `line.p1 -> line.p2` the point lies on.
///
/// Returns `0` on the line, `1` for the upper half-plane and `-1` for the lower
/// one. Reversing the line flips the sign. A NaN evaluation yields `0`.
pub fn relative_to_line_point_location(point: Vec2, line: Segment) -> i32 {
    let value = line.coefficients().eval(point);
    if value > 0.0 {
        -1
    } else if value < 0.0 {
        1
    } else {
        0
    }
}

/// Distance from `point` to the line through `line`. `NaN` for a degenerate line.
pub fn between_point_and_line_distance(point: Vec2, line: Segment) -> f64 {
    let l = line.coefficients();
    l.eval(point).abs() / (l.a * l.a + l.b * l.b).sqrt()
}

/// Intersection of two lines, or `None` when the determinant is exactly zero
/// (parallel or matching lines).
pub fn two_lines_intersection_point(first: Segment, second: Segment) -> Option<Vec2> {
    let l1 = first.coefficients();
    let l2 = second.coefficients();
    let denominator = l1.a * l2.b - l2.a * l1.b;
    if denominator == 0.0 {
        return None;
    }
    let x = (l1.b * l2.c - l2.b * l1.c) / denominator;
    let y = (l2.a * l1.c - l1.a * l2.c) / denominator;
    Some(Vec2::new(x, y))
}

/// `are_two_lines_parallel_eps` at the calculation threshold.
#[inline]
pub fn are_two_lines_parallel(first: Segment, second: Segment) -> bool {
    are_two_lines_parallel_eps(first, second, calculation_threshold())
}

/// `|A1 B2 - A2 B1| < eps`.
pub fn are_two_lines_parallel_eps(first: Segment, second: Segment, eps: f64) -> bool {
    let l1 = first.coefficients();
    let l2 = second.coefficients();
    (l1.a * l2.b - l2.a * l1.b).abs() < eps
}

/// `are_two_lines_matching_eps` at the calculation threshold.
#[inline]
pub fn are_two_lines_matching(first: Segment, second: Segment) -> bool {
    are_two_lines_matching_eps(first, second, calculation_threshold())
}

/// Parallel, and both remaining 2×2 minors of the coefficient matrix vanish.
pub fn are_two_lines_matching_eps(first: Segment, second: Segment, eps: f64) -> bool {
    let l1 = first.coefficients();
    let l2 = second.coefficients();
    (l1.a * l2.b - l2.a * l1.b).abs() < eps
        && (l1.a * l2.c - l2.a * l1.c).abs() < eps
        && (l1.b * l2.c - l2.b * l1.c).abs() < eps
}

/// `are_two_vectors_collinear_eps` at the calculation threshold.
#[inline]
pub fn are_two_vectors_collinear(first: Vec2, second: Vec2) -> bool {
    are_two_vectors_collinear_eps(first, second, calculation_threshold())
}

/// Directions are collinear: `|x1 y2 - x2 y1| < eps`.
pub fn are_two_vectors_collinear_eps(first: Vec2, second: Vec2, eps: f64) -> bool {
    let (a1, b1) = vector_coefficients(first);
    let (a2, b2) = vector_coefficients(second);
    (a1 * b2 - a2 * b1).abs() < eps
}

/// `are_two_lines_perpendicular_eps` at the calculation threshold.
#[inline]
pub fn are_two_lines_perpendicular(first: Segment, second: Segment) -> bool {
    are_two_lines_perpendicular_eps(first, second, calculation_threshold())
}

/// Normals are orthogonal: `|A1 A2 + B1 B2| < eps`.
pub fn are_two_lines_perpendicular_eps(first: Segment, second: Segment, eps: f64) -> bool {
    let l1 = first.coefficients();
    let l2 = second.coefficients();
    (l1.a * l2.a + l1.b * l2.b).abs() < eps
}

/// `are_two_vectors_perpendicular_eps` at the calculation threshold.
#[inline]
pub fn are_two_vectors_perpendicular(first: Vec2, second: Vec2) -> bool {
    are_two_vectors_perpendicular_eps(first, second, calculation_threshold())
}

/// Directions are orthogonal: `|x1 x2 + y1 y2| < eps`.
pub fn are_two_vectors_perpendicular_eps(first: Vec2, second: Vec2, eps: f64) -> bool {
    let (a1, b1) = vector_coefficients(first);
    let (a2, b2) = vector_coefficients(second);
    (a1 * a2 + b1 * b2).abs() < eps
}

/// `between_two_lines_angle_eps` at the calculation threshold.
#[inline]
pub fn between_two_lines_angle(first: Segment, second: Segment) -> f64 {
    between_two_lines_angle_eps(first, second, calculation_threshold())
}

/// Acute angle between two undirected lines, in degrees within `[0, 90]`.
///
/// A dot product of the normals below `eps` counts as perpendicular (90).
pub fn between_two_lines_angle_eps(first: Segment, second: Segment, eps: f64) -> f64 {
    let l1 = first.coefficients();
    let l2 = second.coefficients();
    let denominator = l1.a * l2.a + l1.b * l2.b;
    if denominator.abs() < eps {
        return 90.0;
    }
    let tangent = ((l1.a * l2.b - l2.a * l1.b) / denominator).abs();
    tangent.atan() * DEG_PER_RAD
}

/// Angle between two directed vectors, in degrees within `[0, 180]`.
///
/// The cosine is clamped to `[-1, 1]`; a zero vector gives `NaN`.
/// While `|v1|²`, `|v2|²` and their product are normal floats, `|v1||v2|` is
/// taken as `sqrt(|v1|² |v2|²)`, so `v` against itself is exactly 0. Outside
/// that range the cosine comes from the unit vectors instead.
pub fn between_two_vectors_angle(first: Vec2, second: Vec2) -> f64 {
    let (n1, n2) = (first.dot(first), second.dot(second));
    let squared = n1 * n2;
    let cosine = if n1.is_normal() && n2.is_normal() && squared.is_normal() {
        first.dot(second) / squared.sqrt()
    } else {
        first.unit().dot(second.unit())
    };
    // NaN passes through `clamp` untouched
    cosine.clamp(-1.0, 1.0).acos() * DEG_PER_RAD
}

/// How two lines relate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineRelation {
    Intersecting(Vec2),
    Parallel,
    Matching,
}

/// `two_lines_relation_eps` at the calculation threshold.
#[inline]
pub fn two_lines_relation(first: Segment, second: Segment) -> LineRelation {
    two_lines_relation_eps(first, second, calculation_threshold())
}

/// Matching is tested first (thresholded). Otherwise the exact intersection
/// decides between `Intersecting` and `Parallel`.
pub fn two_lines_relation_eps(first: Segment, second: Segment, eps: f64) -> LineRelation {
    if are_two_lines_matching_eps(first, second, eps) {
        return LineRelation::Matching;
    }
    match two_lines_intersection_point(first, second) {
        Some(p) => LineRelation::Intersecting(p),
        None => LineRelation::Parallel,
    }
}
