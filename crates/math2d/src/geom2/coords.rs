//! Raw-coordinate entry points.
//!
//! Each function packs its arguments into `Vec2`/`Segment` and delegates to
//! `kernel`, so both calling conventions give identical results.

#![allow(clippy::too_many_arguments)]

use super::kernel;
use super::types::{Segment, Vec2};

#[inline]
pub fn line_coefficients(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64, f64) {
    kernel::line_coefficients(Vec2::new(x1, y1), Vec2::new(x2, y2)).into()
}

#[inline]
pub fn vector_angle(x: f64, y: f64) -> f64 {
    kernel::vector_angle(Vec2::new(x, y))
}

#[inline]
pub fn relative_to_line_point_location(
    point_x: f64,
    point_y: f64,
    line_x1: f64,
    line_y1: f64,
    line_x2: f64,
    line_y2: f64,
) -> i32 {
    kernel::relative_to_line_point_location(
        Vec2::new(point_x, point_y),
        Segment::from_coords(line_x1, line_y1, line_x2, line_y2),
    )
}

#[inline]
pub fn between_point_and_line_distance(
    point_x: f64,
    point_y: f64,
    line_x1: f64,
    line_y1: f64,
    line_x2: f64,
    line_y2: f64,
) -> f64 {
    kernel::between_point_and_line_distance(
        Vec2::new(point_x, point_y),
        Segment::from_coords(line_x1, line_y1, line_x2, line_y2),
    )
}

#[inline]
pub fn two_lines_intersection_point(
    first_x1: f64,
    first_y1: f64,
    first_x2: f64,
    first_y2: f64,
    second_x1: f64,
    second_y1: f64,
    second_x2: f64,
    second_y2: f64,
) -> Option<(f64, f64)> {
    kernel::two_lines_intersection_point(
        Segment::from_coords(first_x1, first_y1, first_x2, first_y2),
        Segment::from_coords(second_x1, second_y1, second_x2, second_y2),
    )
    .map(Into::into)
}

#[inline]
pub fn are_two_lines_parallel(
    first_x1: f64,
    first_y1: f64,
    first_x2: f64,
    first_y2: f64,
    second_x1: f64,
    second_y1: f64,
    second_x2: f64,
    second_y2: f64,
) -> bool {
    kernel::are_two_lines_parallel(
        Segment::from_coords(first_x1, first_y1, first_x2, first_y2),
        Segment::from_coords(second_x1, second_y1, second_x2, second_y2),
    )
}

#[inline]
pub fn are_two_lines_matching(
    first_x1: f64,
    first_y1: f64,
    first_x2: f64,
    first_y2: f64,
    second_x1: f64,
    second_y1: f64,
    second_x2: f64,
    second_y2: f64,
) -> bool {
    kernel::are_two_lines_matching(
        Segment::from_coords(first_x1, first_y1, first_x2, first_y2),
        Segment::from_coords(second_x1, second_y1, second_x2, second_y2),
    )
}

#[inline]
pub fn are_two_lines_perpendicular(
    first_x1: f64,
    first_y1: f64,
    first_x2: f64,
    first_y2: f64,
    second_x1: f64,
    second_y1: f64,
    second_x2: f64,
    second_y2: f64,
) -> bool {
    kernel::are_two_lines_perpendicular(
        Segment::from_coords(first_x1, first_y1, first_x2, first_y2),
        Segment::from_coords(second_x1, second_y1, second_x2, second_y2),
    )
}

#[inline]
pub fn are_two_vectors_collinear(first_x: f64, first_y: f64, second_x: f64, second_y: f64) -> bool {
    kernel::are_two_vectors_collinear(Vec2::new(first_x, first_y), Vec2::new(second_x, second_y))
}

#[inline]
pub fn are_two_vectors_perpendicular(
    first_x: f64,
    first_y: f64,
    second_x: f64,
    second_y: f64,
) -> bool {
    kernel::are_two_vectors_perpendicular(
        Vec2::new(first_x, first_y),
        Vec2::new(second_x, second_y),
    )
}

#[inline]
pub fn between_two_lines_angle(
    first_x1: f64,
    first_y1: f64,
    first_x2: f64,
    first_y2: f64,
    second_x1: f64,
    second_y1: f64,
    second_x2: f64,
    second_y2: f64,
) -> f64 {
    kernel::between_two_lines_angle(
        Segment::from_coords(first_x1, first_y1, first_x2, first_y2),
        Segment::from_coords(second_x1, second_y1, second_x2, second_y2),
    )
}

#[inline]
pub fn between_two_vectors_angle(first_x: f64, first_y: f64, second_x: f64, second_y: f64) -> f64 {
    kernel::between_two_vectors_angle(Vec2::new(first_x, first_y), Vec2::new(second_x, second_y))
}
