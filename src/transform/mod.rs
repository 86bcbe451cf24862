//! Affine transforms and the factories that build the common ones.

mod affine;
mod fit;
mod rotate;
mod scale;
mod translate;

pub use affine::AffineTransf;
pub use fit::fit_rect_inside;
pub use rotate::rotation;
pub use scale::scaling;
pub use translate::translation;
