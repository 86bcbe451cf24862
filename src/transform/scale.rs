use crate::geometry::Projectable;

use super::{translation, AffineTransf};

/// Scaling by `(sx, sy)` that keeps `center` fixed.
#[must_use]
pub fn scaling(sx: f64, sy: f64, center: &impl Projectable) -> AffineTransf {
    let (cx, cy) = (center.x(), center.y());
    let scale = AffineTransf::new(sx, sy, 0.0, 0.0, 0.0, 0.0);

    translation(-cx, -cy)
        .append(&scale)
        .append(&translation(cx, cy))
}
