use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::math::{self, Point2, Vector2};

use super::Angle;

/// Anything with planar `x` and `y` projections.
pub trait Projectable {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    /// Copies the projections into a [`Vector`].
    fn to_vector(&self) -> Vector {
        Vector::new(self.x(), self.y())
    }
}

/// Euclidean distance between two projectables.
#[must_use]
pub fn distance_between(p: &impl Projectable, q: &impl Projectable) -> f64 {
    (p.x() - q.x()).hypot(p.y() - q.y())
}

/// A 2D vector, also used to represent points.
///
/// Equality is tolerance based: two vectors are equal when both coordinates
/// are within [`math::TOLERANCE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ORIGIN: Vector = Vector { x: 0.0, y: 0.0 };
    pub const I_VERSOR: Vector = Vector { x: 1.0, y: 0.0 };
    pub const MINUS_I_VERSOR: Vector = Vector { x: -1.0, y: 0.0 };
    pub const J_VERSOR: Vector = Vector { x: 0.0, y: 1.0 };
    pub const MINUS_J_VERSOR: Vector = Vector { x: 0.0, y: -1.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both coordinates rounded to the nearest integer.
    #[must_use]
    pub fn with_round_coords(x: f64, y: f64) -> Self {
        Self::new(x.round(), y.round())
    }

    /// Returns the length of the vector.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Whether the length is one within tolerance.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        math::is_close_to_one(self.length())
    }

    /// Whether the length is zero within tolerance.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        math::is_close_to_zero(self.length())
    }

    /// Signed angle from the positive x axis to this vector.
    #[must_use]
    pub fn angle_with_horizontal(&self) -> Angle {
        Self::I_VERSOR.angle_to(self)
    }

    /// Signed angle from the positive y axis to this vector.
    #[must_use]
    pub fn angle_with_vertical(&self) -> Angle {
        Self::J_VERSOR.angle_to(self)
    }

    /// Returns the unit vector with the same direction.
    ///
    /// The zero vector has no direction and yields NaN coordinates.
    #[must_use]
    pub fn normalized(&self) -> Self {
        if self.is_unit() {
            return *self;
        }
        let length = self.length();
        Self::new(self.x / length, self.y / length)
    }

    /// Distance between both points.
    #[must_use]
    pub fn distance_to(&self, other: &impl Projectable) -> f64 {
        distance_between(self, other)
    }

    /// Returns `self + vector * times`.
    #[must_use]
    pub fn displaced(&self, vector: &Vector, times: f64) -> Self {
        self.plus(&vector.scaled_by(times))
    }

    /// Returns the vector multiplied by `factor`.
    #[must_use]
    pub fn scaled_by(&self, factor: f64) -> Self {
        Self::new(factor * self.x, factor * self.y)
    }

    /// Same direction with the given length.
    #[must_use]
    pub fn scaled_to_length(&self, length: f64) -> Self {
        self.normalized().scaled_by(length)
    }

    #[must_use]
    pub fn plus(&self, addend: &Vector) -> Self {
        Self::new(self.x + addend.x, self.y + addend.y)
    }

    #[must_use]
    pub fn minus(&self, subtrahend: &Vector) -> Self {
        Self::new(self.x - subtrahend.x, self.y - subtrahend.y)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    #[must_use]
    pub fn cross(&self, other: &Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[must_use]
    pub fn is_parallel_to(&self, other: &Vector) -> bool {
        math::is_close_to_zero(self.cross(other))
    }

    #[must_use]
    pub fn is_perpendicular_to(&self, other: &Vector) -> bool {
        math::is_close_to_zero(self.dot(other))
    }

    /// Signed angle from `self` to `other`, counter-clockwise positive.
    ///
    /// The sign comes from the cross product, so opposite vectors (zero cross
    /// product) report a zero angle.
    #[must_use]
    pub fn angle_to(&self, other: &Vector) -> Angle {
        let cos = self.dot(other) / (self.length() * other.length());
        let value = cos.clamp(-1.0, 1.0).acos();
        Angle::from_radians(math::sign(self.cross(other)) * value)
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    #[must_use]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Returns the vector pointing the other way.
    #[must_use]
    pub fn opposite(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Returns the vector with both coordinates rounded.
    #[must_use]
    pub fn rounded_coords(&self) -> Self {
        Self::with_round_coords(self.x, self.y)
    }

    /// Length of the projection of `self` over `direction`.
    #[must_use]
    pub fn projected_over(&self, direction: &Vector) -> f64 {
        self.dot(&direction.normalized())
    }

    /// Angle of the vector measured from the x axis.
    #[must_use]
    pub fn as_angle(&self) -> Angle {
        self.angle_with_horizontal()
    }

    /// Rotates the vector counter-clockwise by `angle`.
    #[must_use]
    pub fn rotated(&self, angle: Angle) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Projectable for Vector {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn to_vector(&self) -> Vector {
        *self
    }
}

impl Projectable for Point2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Projectable for Vector2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Projectable for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        math::are_close_enough(self.x, other.x) && math::are_close_enough(self.y, other.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        self.plus(&rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.minus(&rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.opposite()
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scaled_by(rhs)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for Vector {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2> for Vector {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector> for Vector2 {
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector> for Point2 {
    fn from(v: Vector) -> Self {
        Point2::new(v.x, v.y)
    }
}
