use crate::geometry::Angle;

/// A complex number with its polar attributes precomputed.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    re: f64,
    im: f64,
    magnitude: f64,
    angle: Angle,
}

impl ComplexNumber {
    #[must_use]
    pub fn new(re: f64, im: f64) -> Self {
        Self {
            re,
            im,
            magnitude: re.hypot(im),
            angle: Angle::from_radians((im / re).atan()),
        }
    }

    /// Returns the real part.
    #[must_use]
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Returns the imaginary part.
    #[must_use]
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Returns the modulus.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Argument computed as `atan(im / re)`, so it stays within `(-pi/2, pi/2)`.
    #[must_use]
    pub fn angle(&self) -> Angle {
        self.angle
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        super::are_close_enough(self.re, other.re) && super::are_close_enough(self.im, other.im)
    }
}

/// Roots of `a*x^2 + b*x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadEqSolution {
    /// Two distinct real roots, `one` being the larger when `a > 0`.
    RealDual { one: f64, two: f64 },
    /// A repeated real root.
    RealSingle { one: f64 },
    /// Two complex-conjugate roots, `one` carrying the positive imaginary part when `a > 0`.
    Complex {
        one: ComplexNumber,
        two: ComplexNumber,
    },
}

impl QuadEqSolution {
    #[must_use]
    pub fn is_real_dual(&self) -> bool {
        matches!(self, Self::RealDual { .. })
    }

    #[must_use]
    pub fn is_real_single(&self) -> bool {
        matches!(self, Self::RealSingle { .. })
    }

    #[must_use]
    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex { .. })
    }
}

/// Solves `a*x^2 + b*x + c = 0`, classifying the roots by the sign of the
/// discriminant.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadEqSolution {
    let discriminant = b * b - 4.0 * a * c;
    let two_a = 2.0 * a;

    if discriminant > 0.0 {
        let sqr = discriminant.sqrt();
        return QuadEqSolution::RealDual {
            one: (-b + sqr) / two_a,
            two: (-b - sqr) / two_a,
        };
    }

    if discriminant < 0.0 {
        let re = -b / two_a;
        let im = (-discriminant).sqrt() / two_a;
        return QuadEqSolution::Complex {
            one: ComplexNumber::new(re, im),
            two: ComplexNumber::new(re, -im),
        };
    }

    QuadEqSolution::RealSingle { one: -b / two_a }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn two_real_roots() {
        match solve_quadratic(1.0, 3.0, 2.0) {
            QuadEqSolution::RealDual { one, two } => {
                assert!((one + 1.0).abs() < TOLERANCE);
                assert!((two + 2.0).abs() < TOLERANCE);
            }
            other => panic!("expected two real roots, got {other:?}"),
        }
    }

    #[test]
    fn repeated_root() {
        match solve_quadratic(2.0, 4.0, 2.0) {
            QuadEqSolution::RealSingle { one } => assert!((one + 1.0).abs() < TOLERANCE),
            other => panic!("expected a single root, got {other:?}"),
        }
    }

    #[test]
    fn complex_roots() {
        match solve_quadratic(1.0, 2.0, 2.0) {
            QuadEqSolution::Complex { one, two } => {
                assert_eq!(one, ComplexNumber::new(-1.0, 1.0));
                assert_eq!(two, ComplexNumber::new(-1.0, -1.0));
            }
            other => panic!("expected complex roots, got {other:?}"),
        }
    }

    #[test]
    fn predicates_follow_the_variant() {
        assert!(solve_quadratic(1.0, 3.0, 2.0).is_real_dual());
        assert!(solve_quadratic(2.0, 4.0, 2.0).is_real_single());
        assert!(solve_quadratic(1.0, 2.0, 2.0).is_complex());
    }

    #[test]
    fn complex_number_polar_attributes() {
        let z = ComplexNumber::new(1.0, 1.0);
        assert!((z.magnitude() - 2_f64.sqrt()).abs() < TOLERANCE);
        assert!((z.angle().degrees() - 45.0).abs() < 1e-9);
        assert!((z.re() - 1.0).abs() < TOLERANCE);
        assert!((z.im() - 1.0).abs() < TOLERANCE);
    }
}
