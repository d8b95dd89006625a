//! Value types for the 2D kernel.
//!
//! - `Vec2`: immutable coordinate pair, used both as a point and as a displacement.
//! - `Segment`: two defining points of an (infinite) line.
//! - `LineCoefficients`: implicit form `A x + B y + C = 0`.
//!
//! Vector arithmetic goes through `nalgebra::Vector2<f64>`; `Vec2` only adds the
//! exact `Eq`/`Hash` and checked-division semantics on top.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{GeomError, Result};

/// 2D point or vector.
///
/// Equality is exact per component with two adjustments that keep `Eq`/`Hash`
/// lawful: `NaN == NaN`, and `0.0 == -0.0` (as with `f64 ==`).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f64 {
        self.to_vector().dot(&rhs.to_vector())
    }

    /// z-component of the 3D cross product (signed parallelogram area).
    #[inline]
    pub fn cross(self, rhs: Vec2) -> f64 {
        self.to_vector().perp(&rhs.to_vector())
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.to_vector().norm()
    }

    /// Unit vector with the direction of `self`, scaled by the largest
    /// component first so neither tiny nor huge inputs under/overflow.
    /// `NaN` components for the zero vector.
    #[inline]
    pub fn unit(self) -> Vec2 {
        let v = self.to_vector();
        Self::from_vector((v / v.amax()).normalize())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise division; `None` for a zero divisor.
    #[inline]
    pub fn checked_div(self, rhs: f64) -> Option<Vec2> {
        if rhs == 0.0 {
            None
        } else {
            Some(Self::from_vector(self.to_vector() / rhs))
        }
    }

    #[inline]
    pub fn checked_div_int(self, rhs: i32) -> Option<Vec2> {
        self.checked_div(f64::from(rhs))
    }
}

#[inline]
fn coord_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[inline]
fn coord_hash_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        // folds -0.0 into +0.0
        (v + 0.0).to_bits()
    }
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        coord_eq(self.x, other.x) && coord_eq(self.y, other.y)
    }
}

impl Eq for Vec2 {}

impl Hash for Vec2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        coord_hash_bits(self.x).hash(state);
        coord_hash_bits(self.y).hash(state);
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::from_vector(self.to_vector() + rhs.to_vector())
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::from_vector(self.to_vector() - rhs.to_vector())
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::from_vector(-self.to_vector())
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::from_vector(self.to_vector() * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: i32) -> Vec2 {
        self * f64::from(rhs)
    }
}

impl Mul<Vec2> for i32 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * f64::from(self)
    }
}

/// Division by zero yields `None` rather than infinities.
impl Div<f64> for Vec2 {
    type Output = Option<Vec2>;
    #[inline]
    fn div(self, rhs: f64) -> Option<Vec2> {
        self.checked_div(rhs)
    }
}

impl Div<i32> for Vec2 {
    type Output = Option<Vec2>;
    #[inline]
    fn div(self, rhs: i32) -> Option<Vec2> {
        self.checked_div_int(rhs)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Vec2::new(x, y)
    }
}

impl From<Vec2> for (f64, f64) {
    #[inline]
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

impl From<Vector2<f64>> for Vec2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Vec2::from_vector(v)
    }
}

impl From<Vec2> for Vector2<f64> {
    #[inline]
    fn from(v: Vec2) -> Self {
        v.to_vector()
    }
}

/// Implicit line `a x + b y + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineCoefficients {
    /// Coefficients of the line through `p1` and `p2`.
    ///
    /// `a = y2 - y1`, `b = x1 - x2`, `c = x2*y1 - x1*y2`. Coincident points give `(0, 0, 0)`.
    #[inline]
    pub fn through(p1: Vec2, p2: Vec2) -> Self {
        Self {
            a: p2.y - p1.y,
            b: p1.x - p2.x,
            c: p2.x * p1.y - p1.x * p2.y,
        }
    }

    /// `a x + b y + c`; zero on the line, sign tells the half-plane.
    #[inline]
    pub fn eval(&self, p: Vec2) -> f64 {
        self.normal().dot(p) + self.c
    }

    /// Normal vector `(a, b)`.
    #[inline]
    pub fn normal(&self) -> Vec2 {
        Vec2::new(self.a, self.b)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }
}

impl From<LineCoefficients> for (f64, f64, f64) {
    #[inline]
    fn from(l: LineCoefficients) -> Self {
        (l.a, l.b, l.c)
    }
}

/// Two defining points of a line. Extent is ignored by every kernel operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    /// Validating constructor: rejects non-finite and coincident points.
    pub fn try_new(p1: Vec2, p2: Vec2) -> Result<Self> {
        if !p1.is_finite() || !p2.is_finite() {
            return Err(GeomError::NonFinite);
        }
        if p1 == p2 {
            return Err(GeomError::DegenerateLine { x: p1.x, y: p1.y });
        }
        Ok(Self { p1, p2 })
    }

    #[inline]
    pub fn coefficients(&self) -> LineCoefficients {
        LineCoefficients::through(self.p1, self.p2)
    }

    /// `p2 - p1`.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.p2 - self.p1
    }

    /// Same line, opposite orientation.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }
}
