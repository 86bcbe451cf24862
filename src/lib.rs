pub mod error;
pub mod geometry;
pub mod math;
pub mod transform;

pub use error::{GeomError, Result};
pub use geometry::{
    Angle, Arc, Circle, Line, Polygon, Projectable, Quadrant, Rect, Segment, Size, TParam, Vector,
};
pub use transform::AffineTransf;
