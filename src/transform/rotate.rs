use crate::geometry::{Angle, Projectable};

use super::{translation, AffineTransf};

/// Counter-clockwise rotation by `angle` around `center`.
#[must_use]
pub fn rotation(angle: Angle, center: &impl Projectable) -> AffineTransf {
    let (cx, cy) = (center.x(), center.y());
    let (cos, sin) = (angle.cos(), angle.sin());
    let rotate = AffineTransf::new(cos, cos, 0.0, 0.0, -sin, sin);

    translation(-cx, -cy)
        .append(&rotate)
        .append(&translation(cx, cy))
}
