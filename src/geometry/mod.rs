pub mod angle;
pub mod arc;
pub mod circle;
pub mod intersection;
pub mod line;
pub mod polygon;
pub mod rect;
pub mod segment;
pub mod size;
pub mod tparam;
pub mod vector;
pub mod vectors;

pub use angle::{Angle, Quadrant};
pub use arc::Arc;
pub use circle::Circle;
pub use intersection::{PolygonSegmentIntersection, SegmentIntersection, SegmentLineIntersection};
pub use line::Line;
pub use polygon::{Polygon, SegmentContainment};
pub use rect::Rect;
pub use segment::{ClosestPoint, Segment};
pub use size::Size;
pub use tparam::TParam;
pub use vector::{distance_between, Projectable, Vector};
