use crate::geometry::Vector;

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if the
/// directions are not parallel.
#[must_use]
pub fn line_line_params(p1: &Vector, d1: &Vector, p2: &Vector, d2: &Vector) -> Option<(f64, f64)> {
    if d1.is_parallel_to(d2) {
        return None;
    }
    let cross = d1.cross(d2);
    let delta = p2.minus(p1);
    let t = (delta.x * d2.y - delta.y * d2.x) / cross;
    let u = (delta.x * d1.y - delta.y * d1.x) / cross;
    Some((t, u))
}

/// Bounded segment-segment parameters.
///
/// Segments are `a0 + t * da` and `b0 + u * db` with `t, u` in `[0, 1]`.
/// Returns `None` for parallel directions or when either parameter falls
/// outside the unit range.
#[must_use]
pub fn segment_segment_params(
    a0: &Vector,
    da: &Vector,
    b0: &Vector,
    db: &Vector,
) -> Option<(f64, f64)> {
    let (t, u) = line_line_params(a0, da, b0, db)?;
    let unit = 0.0..=1.0;
    (unit.contains(&t) && unit.contains(&u)).then_some((t, u))
}
