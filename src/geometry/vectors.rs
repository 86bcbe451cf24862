//! Free-standing helpers for building and ordering [`Vector`]s.

use std::cmp::Ordering;

use crate::error::Result;
use crate::math::{self, numbers};

use super::{Line, Projectable, Vector};

/// Vector going from `start` to `end`.
#[must_use]
pub fn between(start: &impl Projectable, end: &impl Projectable) -> Vector {
    Vector::new(end.x() - start.x(), end.y() - start.y())
}

/// Unit vector pointing from `start` to `end`.
#[must_use]
pub fn unit_between(start: &impl Projectable, end: &impl Projectable) -> Vector {
    between(start, end).normalized()
}

/// Midpoint of `start` and `end`.
#[must_use]
pub fn point_half_way(start: &impl Projectable, end: &impl Projectable) -> Vector {
    Vector::new(0.5 * (start.x() + end.x()), 0.5 * (start.y() + end.y()))
}

/// Sum of both unit vectors, pointing along the bisector of `one` and `two`.
#[must_use]
pub fn bisector(one: &Vector, two: &Vector) -> Vector {
    one.normalized().plus(&two.normalized())
}

/// Lexicographic order by `x` then `y`, treating coordinates within
/// tolerance as equal.
#[must_use]
pub fn compare(a: &impl Projectable, b: &impl Projectable) -> Ordering {
    if math::are_close_enough(a.x(), b.x()) {
        if math::are_close_enough(a.y(), b.y()) {
            return Ordering::Equal;
        }
        return a.y().total_cmp(&b.y());
    }
    a.x().total_cmp(&b.x())
}

#[must_use]
pub fn sorted(points: &[Vector]) -> Vec<Vector> {
    let mut points = points.to_vec();
    points.sort_by(|a, b| compare(a, b));
    points
}

/// Orthonormalizes the base `(v1, v2)` with the Gram-Schmidt process.
#[must_use]
pub fn orthonormalize_base(v1: &Vector, v2: &Vector) -> [Vector; 2] {
    let projection = v1.scaled_to_length(v2.projected_over(v1));
    let u2 = v2.minus(&projection);
    [v1.normalized(), u2.normalized()]
}

/// Splits `vec` component-wise with [`numbers::divide_in_integer_parts`].
///
/// # Errors
///
/// Returns an error if `divisions` is zero.
pub fn divide_in_integer_parts(vec: &Vector, divisions: u32) -> Result<Vec<Vector>> {
    let xs = numbers::divide_in_integer_parts(vec.x, divisions)?;
    let ys = numbers::divide_in_integer_parts(vec.y, divisions)?;
    Ok(xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Vector::new(x, y))
        .collect())
}

/// Starts a fluent point construction from `base`.
///
/// ```
/// use geom2d::geometry::{vectors, Vector};
///
/// let p = vectors::starting_at(Vector::new(1.0, 2.0))
///     .with_direction(Vector::new(4.0, 3.0))
///     .and_length(10.0);
/// assert_eq!(p, Vector::new(9.0, 8.0));
/// ```
#[must_use]
pub fn starting_at(base: Vector) -> StartingAt {
    StartingAt { base }
}

/// First step of [`starting_at`].
#[derive(Debug, Clone, Copy)]
pub struct StartingAt {
    base: Vector,
}

impl StartingAt {
    #[must_use]
    pub fn with_direction(self, direction: Vector) -> WithDirection {
        WithDirection {
            base: self.base,
            direction,
        }
    }
}

/// Second step of [`starting_at`].
#[derive(Debug, Clone, Copy)]
pub struct WithDirection {
    base: Vector,
    direction: Vector,
}

impl WithDirection {
    /// Point at `length` units from the base along the direction.
    #[must_use]
    pub fn and_length(self, length: f64) -> Vector {
        self.base.displaced(&self.direction.normalized(), length)
    }

    /// Point along the direction whose x coordinate is `x`.
    ///
    /// Returns `None` for a vertical direction.
    #[must_use]
    pub fn and_x_coord(self, x: f64) -> Option<Vector> {
        let line = Line::new(self.base, self.direction);
        line.intersection_with(&Line::vertical(x))
    }

    /// Point along the direction whose y coordinate is `y`.
    ///
    /// Returns `None` for a horizontal direction.
    #[must_use]
    pub fn and_y_coord(self, y: f64) -> Option<Vector> {
        let line = Line::new(self.base, self.direction);
        line.intersection_with(&Line::horizontal(y))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const BASE: Vector = Vector::new(1.0, 2.0);
    const DIRECTION: Vector = Vector::new(4.0, 3.0);

    #[test]
    fn point_from_base_direction_and_length() {
        let p = starting_at(BASE).with_direction(DIRECTION).and_length(10.0);
        assert_eq!(p, Vector::new(9.0, 8.0));
    }

    #[test]
    fn point_from_base_direction_and_coords() {
        let along = starting_at(BASE).with_direction(DIRECTION);
        assert_eq!(along.and_x_coord(13.0).unwrap(), Vector::new(13.0, 11.0));
        assert_eq!(along.and_y_coord(11.0).unwrap(), Vector::new(13.0, 11.0));
    }

    #[test]
    fn axis_parallel_direction_has_no_coord_point() {
        let along = starting_at(BASE).with_direction(Vector::J_VERSOR);
        assert!(along.and_x_coord(5.0).is_none());
        assert_eq!(along.and_y_coord(5.0).unwrap(), Vector::new(1.0, 5.0));
    }

    #[test]
    fn half_way_and_bisector() {
        let middle = point_half_way(&Vector::ORIGIN, &(200.0, 300.0));
        assert_eq!(middle, Vector::new(100.0, 150.0));
        let diagonal = bisector(&Vector::I_VERSOR, &Vector::J_VERSOR);
        assert_eq!(diagonal, Vector::new(1.0, 1.0));
    }

    #[test]
    fn between_points() {
        assert_eq!(between(&(1.0, 1.0), &(4.0, 5.0)), Vector::new(3.0, 4.0));
        let unit = unit_between(&(1.0, 1.0), &(4.0, 5.0));
        assert_eq!(unit, Vector::new(0.6, 0.8));
    }

    #[test]
    fn ordering() {
        let p = Vector::new(1.0, 3.0);
        assert_eq!(compare(&p, &p), Ordering::Equal);
        assert_eq!(compare(&p, &Vector::new(1.0, 5.0)), Ordering::Less);
        let cases = [
            ((1.0, 5.0), (1.0, 2.0), Ordering::Greater),
            ((1.0, 2.0), (7.0, 2.0), Ordering::Less),
            ((7.0, 2.0), (3.0, 2.0), Ordering::Greater),
        ];
        for (one, two, expected) in cases {
            assert_eq!(compare(&one, &two), expected);
        }
    }

    #[test]
    fn sorting() {
        let (a, b, c) = (
            Vector::new(1.0, 2.0),
            Vector::new(1.0, 9.0),
            Vector::new(3.0, 1.0),
        );
        assert_eq!(sorted(&[c, b, a]), vec![a, b, c]);
    }

    #[test]
    fn orthonormal_base_is_kept() {
        let [e1, e2] = orthonormalize_base(&Vector::I_VERSOR, &Vector::J_VERSOR);
        assert_eq!(e1, Vector::I_VERSOR);
        assert_eq!(e2, Vector::J_VERSOR);
    }

    #[test]
    fn base_is_orthonormalized() {
        let [e1, e2] = orthonormalize_base(&Vector::new(3.0, 1.0), &Vector::new(2.0, 2.0));
        let sqrt10 = 10_f64.sqrt();
        assert_eq!(e1, Vector::new(3.0 / sqrt10, 1.0 / sqrt10));
        assert_eq!(e2, Vector::new(-1.0 / sqrt10, 3.0 / sqrt10));
    }

    #[test]
    fn vector_divided_in_integer_parts() {
        let vec = Vector::new(3.25, 6.67);
        assert!(divide_in_integer_parts(&vec, 0).is_err());

        let parts = divide_in_integer_parts(&vec, 3).unwrap();
        assert_eq!(parts[0], Vector::new(1.0, 2.0));
        assert_eq!(parts[1], Vector::new(1.0, 2.0));
        assert_eq!(parts[2], Vector::new(1.25, 2.67));
    }
}
