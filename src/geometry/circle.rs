use crate::math;

use super::{Projectable, Vector};

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    center: Vector,
    radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(center: Vector, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Vector {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether `point` is strictly inside the circle.
    #[must_use]
    pub fn contains_point(&self, point: &impl Projectable) -> bool {
        self.center.distance_to(point) < self.radius
    }

    /// Same center, radius multiplied by `scale`.
    #[must_use]
    pub fn scaled(&self, scale: f64) -> Self {
        Self::new(self.center, scale * self.radius)
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && math::are_close_enough(self.radius, other.radius)
    }
}
