use crate::math::{self, intersect_2d};

use super::{vectors, Projectable, Vector};

/// An infinite line defined by a base point and a direction vector.
///
/// The parametric form is: `P(t) = base + t * direction`. The direction
/// doesn't need to be unit length, but a zero direction leaves the line
/// undefined.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    base: Vector,
    direction: Vector,
    direction_versor: Vector,
}

impl Line {
    /// Creates a new line from a base point and direction.
    #[must_use]
    pub fn new(base: Vector, direction: Vector) -> Self {
        Self {
            base,
            direction,
            direction_versor: direction.normalized(),
        }
    }

    /// Vertical line `x = x`.
    #[must_use]
    pub fn vertical(x: f64) -> Self {
        Self::new(Vector::new(x, 0.0), Vector::J_VERSOR)
    }

    /// Horizontal line `y = y`.
    #[must_use]
    pub fn horizontal(y: f64) -> Self {
        Self::new(Vector::new(0.0, y), Vector::I_VERSOR)
    }

    /// Line through `start` heading towards `end`.
    #[must_use]
    pub fn between(start: &impl Projectable, end: &impl Projectable) -> Self {
        Self::new(start.to_vector(), vectors::between(start, end))
    }

    /// Returns the point the line passes through.
    #[must_use]
    pub fn base(&self) -> &Vector {
        &self.base
    }

    /// Returns the direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector {
        &self.direction
    }

    /// Returns the unit direction of the line.
    #[must_use]
    pub fn direction_versor(&self) -> &Vector {
        &self.direction_versor
    }

    /// Whether the direction has no vertical component.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        math::is_close_to_zero(self.direction.y)
    }

    /// Whether the direction has no horizontal component.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        math::is_close_to_zero(self.direction.x)
    }

    /// The `y` where the line crosses the y axis; `None` for vertical lines.
    #[must_use]
    pub fn y_intercept(&self) -> Option<f64> {
        if self.is_vertical() {
            return None;
        }
        let Vector { x: bx, y: by } = self.base;
        let Vector { x: dx, y: dy } = self.direction;
        Some(by - bx * (dy / dx))
    }

    /// The `x` where the line crosses the x axis; `None` for horizontal lines.
    #[must_use]
    pub fn x_intercept(&self) -> Option<f64> {
        if self.is_horizontal() {
            return None;
        }
        let Vector { x: bx, y: by } = self.base;
        let Vector { x: dx, y: dy } = self.direction;
        Some(bx - by * (dx / dy))
    }

    /// Whether both directions are parallel.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        self.direction.is_parallel_to(&other.direction)
    }

    #[must_use]
    pub fn is_perpendicular_to(&self, other: &Line) -> bool {
        self.direction.is_perpendicular_to(&other.direction)
    }

    /// Intersection point with `other`.
    ///
    /// Parallel lines report `None`, coincident ones included.
    #[must_use]
    pub fn intersection_with(&self, other: &Line) -> Option<Vector> {
        let (t, _) = intersect_2d::line_line_params(
            &self.base,
            &self.direction,
            &other.base,
            &other.direction,
        )?;
        Some(self.base.displaced(&self.direction, t))
    }

    /// X coordinate where the line reaches height `y`; `None` for horizontal lines.
    #[must_use]
    pub fn x_at_y(&self, y: f64) -> Option<f64> {
        let x_intercept = self.x_intercept()?;
        let y_slope = self.direction.x / self.direction.y;
        Some(x_intercept + y_slope * y)
    }

    /// Y coordinate where the line reaches `x`; `None` for vertical lines.
    #[must_use]
    pub fn y_at_x(&self, x: f64) -> Option<f64> {
        let y_intercept = self.y_intercept()?;
        let x_slope = self.direction.y / self.direction.x;
        Some(y_intercept + x_slope * x)
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.direction_versor == other.direction_versor
    }
}
