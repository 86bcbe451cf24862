use crate::geometry::{vectors, Rect};

use super::{scaling, translation, AffineTransf};

/// Moves `fit` onto the center of `fixed` and scales it uniformly so it fits
/// inside, times `factor`.
#[must_use]
pub fn fit_rect_inside(fit: &Rect, fixed: &Rect, factor: f64) -> AffineTransf {
    let fixed_center = fixed.center();
    let offset = vectors::between(&fit.center(), &fixed_center);

    let width_ratio = fixed.size().width / fit.size().width;
    let height_ratio = fixed.size().height / fit.size().height;
    let ratio = factor * width_ratio.min(height_ratio);

    let scale = scaling(ratio, ratio, &fixed_center);
    translation(offset.x, offset.y).append(&scale)
}
