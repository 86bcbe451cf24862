use crate::geometry::{Projectable, Vector};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Vector]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Average of the points, `None` when there are none.
#[must_use]
pub fn vertex_average(points: &[Vector]) -> Option<Vector> {
    if points.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let sum = points.iter().fold(Vector::ORIGIN, |acc, p| acc + *p);
    Some(sum * (1.0 / n))
}

/// Lower-left and upper-right corners of the axis-aligned box around the
/// points, `None` when there are none.
#[must_use]
pub fn bounds<P: Projectable>(points: &[P]) -> Option<(Vector, Vector)> {
    let (first, rest) = points.split_first()?;
    let mut min = first.to_vector();
    let mut max = min;
    for p in rest {
        min.x = min.x.min(p.x());
        min.y = min.y.min(p.y());
        max.x = max.x.max(p.x());
        max.y = max.y.max(p.y());
    }
    Some((min, max))
}
