use super::AffineTransf;

/// Translation by `(tx, ty)`.
#[must_use]
pub fn translation(tx: f64, ty: f64) -> AffineTransf {
    AffineTransf::new(1.0, 1.0, tx, ty, 0.0, 0.0)
}
