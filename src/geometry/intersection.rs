//! Result types for intersection queries.
//!
//! Absence of an intersection is reported as `None` by the queries
//! themselves; these types only carry the positive case.

use super::{TParam, Vector};

/// Crossing point of two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentIntersection {
    pub point: Vector,
    /// Position of the point along the receiving segment.
    pub t1: TParam,
    /// Position of the point along the other segment.
    pub t2: TParam,
}

/// Crossing point of a segment and a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLineIntersection {
    pub point: Vector,
    /// Position of the point along the segment.
    pub t1: TParam,
}

/// All the points where a segment crosses a polygon's sides, in side order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonSegmentIntersection {
    pub points: Vec<Vector>,
}

impl PolygonSegmentIntersection {
    /// Whether any crossing point was found.
    #[must_use]
    pub fn has_intersection(&self) -> bool {
        !self.points.is_empty()
    }
}
