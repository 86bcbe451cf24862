use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};
use std::ops::{Add, Neg, Sub};

use crate::math;

use super::Vector;

const MAX_DEGREES: f64 = 360.0;

/// Quadrant of the plane an angle points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

/// A planar angle, kept both in radians and degrees.
///
/// Values above a full turn are wrapped at construction; negative values are
/// kept as given (see [`Angle::positive_radians`] for the `[0, 2pi)` form).
#[derive(Debug, Clone, Copy)]
pub struct Angle {
    radians: f64,
    degrees: f64,
}

impl Angle {
    /// No rotation.
    pub const ZERO: Angle = Angle {
        radians: 0.0,
        degrees: 0.0,
    };

    pub const PI_QUARTER: Angle = Angle {
        radians: FRAC_PI_4,
        degrees: 45.0,
    };

    pub const PI_HALF: Angle = Angle {
        radians: FRAC_PI_2,
        degrees: 90.0,
    };

    pub const MINUS_PI_HALF: Angle = Angle {
        radians: -FRAC_PI_2,
        degrees: -90.0,
    };

    pub const PI: Angle = Angle {
        radians: PI,
        degrees: 180.0,
    };

    pub const TWO_PI: Angle = Angle {
        radians: TAU,
        degrees: 360.0,
    };

    /// Creates an angle from radians, wrapping values strictly above `2pi`.
    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        let radians = if radians > TAU {
            radians % TAU
        } else {
            radians
        };
        Self {
            radians,
            degrees: radians.to_degrees(),
        }
    }

    /// Creates an angle from degrees, wrapping values strictly above `360`.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        let degrees = if degrees > MAX_DEGREES {
            degrees % MAX_DEGREES
        } else {
            degrees
        };
        Self {
            radians: degrees.to_radians(),
            degrees,
        }
    }

    /// Returns the angle in radians.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Returns the radians mapped into `[0, 2pi)`.
    #[must_use]
    pub fn positive_radians(&self) -> f64 {
        if self.radians < 0.0 {
            TAU + self.radians
        } else {
            self.radians
        }
    }

    /// Returns the degrees mapped into `[0, 360)`.
    #[must_use]
    pub fn positive_degrees(&self) -> f64 {
        if self.degrees < 0.0 {
            MAX_DEGREES + self.degrees
        } else {
            self.degrees
        }
    }

    /// Returns the quadrant the angle points into.
    #[must_use]
    pub fn quadrant(&self) -> Quadrant {
        let rads = self.positive_radians();
        if (0.0..FRAC_PI_2).contains(&rads) {
            Quadrant::First
        } else if (FRAC_PI_2..PI).contains(&rads) {
            Quadrant::Second
        } else if (PI..1.5 * PI).contains(&rads) {
            Quadrant::Third
        } else {
            Quadrant::Fourth
        }
    }

    /// Returns the angle with its sign flipped.
    #[must_use]
    pub fn opposite(&self) -> Self {
        Self {
            radians: -self.radians,
            degrees: -self.degrees,
        }
    }

    /// Unit vector pointing in this angle's direction.
    #[must_use]
    pub fn as_vector(&self) -> Vector {
        Vector::new(self.cos(), self.sin())
    }

    /// Cosine of the angle.
    #[must_use]
    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }

    /// Sine of the angle.
    #[must_use]
    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    /// Tangent of the angle.
    #[must_use]
    pub fn tan(&self) -> f64 {
        self.radians.tan()
    }

    /// `-1.0`, `0.0` or `1.0` depending on the sign of the angle.
    #[must_use]
    pub fn sign(&self) -> f64 {
        math::sign(self.radians)
    }

    /// Splits the angle into `steps` equal increments, returning the
    /// cumulative angles (the last one being `self`).
    #[must_use]
    pub fn as_sequence(&self, steps: u32) -> Vec<Angle> {
        let delta = self.radians / f64::from(steps);
        (1..=steps)
            .map(|i| Angle::from_radians(delta * f64::from(i)))
            .collect()
    }

    /// Sum of both angles.
    #[must_use]
    pub fn plus(&self, other: &Angle) -> Self {
        Self::from_radians(self.radians + other.radians)
    }

    /// Difference between both angles.
    #[must_use]
    pub fn minus(&self, other: &Angle) -> Self {
        Self::from_radians(self.radians - other.radians)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        math::are_close_enough(self.radians % TAU, other.radians % TAU)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        self.plus(&rhs)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        self.minus(&rhs)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        self.opposite()
    }
}

/// Returns the angles ordered by their radians value.
#[must_use]
pub fn sorted(angles: &[Angle]) -> Vec<Angle> {
    let mut angles = angles.to_vec();
    angles.sort_by(|a, b| a.radians.total_cmp(&b.radians));
    angles
}
