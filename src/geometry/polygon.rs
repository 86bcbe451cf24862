use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{self, polygon_2d, POLYGON_BOUNDS_MARGIN};

use super::intersection::PolygonSegmentIntersection;
use super::{vectors, Projectable, Rect, Segment, Size, Vector};

/// How much of a segment lies inside a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentContainment {
    /// The segment crosses the boundary or lies fully inside.
    pub partially: bool,
    /// Both endpoints are inside and no side is crossed.
    pub completely: bool,
}

/// A closed polygon given by its ordered vertices.
///
/// Sides join consecutive vertices, the last one closing back to the first.
/// Simplicity (no self intersections) is assumed, not checked.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Vector>,
    sides: Vec<Segment>,
    rect_bounds: Rect,
}

impl Polygon {
    /// Creates a polygon from at least three vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` if fewer than three vertices
    /// are given.
    pub fn new(vertices: Vec<Vector>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            }
            .into());
        }
        Ok(Self::from_valid_vertices(vertices))
    }

    /// Builds a polygon whose vertex count is already known to be valid.
    pub(crate) fn from_valid_vertices(vertices: Vec<Vector>) -> Self {
        let sides = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(start, end)| Segment::new(*start, *end))
            .collect();
        let rect_bounds = polygon_2d::bounds(&vertices).map_or(Rect::NIL, |(min, max)| {
            Rect::new(min, Size::new(max.x - min.x, max.y - min.y))
        });

        Self {
            vertices,
            sides,
            rect_bounds: rect_bounds.with_margin(POLYGON_BOUNDS_MARGIN),
        }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the sides, the last one closing back to the first vertex.
    #[must_use]
    pub fn sides(&self) -> &[Segment] {
        &self.sides
    }

    /// Bounding rect of the vertices, grown by [`POLYGON_BOUNDS_MARGIN`].
    #[must_use]
    pub fn rect_bounds(&self) -> &Rect {
        &self.rect_bounds
    }

    /// Average of the vertices.
    #[must_use]
    pub fn centroid(&self) -> Vector {
        let average = polygon_2d::vertex_average(&self.vertices);
        average.unwrap_or_default()
    }

    /// Positive for counter-clockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        polygon_2d::signed_area(&self.vertices)
    }

    /// Whether `point` lies inside the polygon or on one of its vertices.
    ///
    /// Adds up the signed angles subtended by each side as seen from the
    /// point: a full turn means the point is enclosed.
    #[must_use]
    pub fn contains_point(&self, point: &impl Projectable) -> bool {
        if !self.rect_bounds.contains_point(point) {
            tracing::trace!(x = point.x(), y = point.y(), "point outside polygon bounds");
            return false;
        }

        let to_vertices: Vec<Vector> = self
            .vertices
            .iter()
            .map(|vertex| vectors::between(point, vertex))
            .collect();

        if to_vertices.iter().any(Vector::is_zero) {
            return true;
        }

        let radians: f64 = to_vertices
            .iter()
            .zip(to_vertices.iter().cycle().skip(1))
            .map(|(one, two)| one.angle_to(two).radians())
            .sum();

        math::are_close_enough(radians.abs(), TAU)
    }

    /// Whether `segment` crosses any side.
    #[must_use]
    pub fn has_intersection_with_segment(&self, segment: &Segment) -> bool {
        self.sides
            .iter()
            .any(|side| side.intersection_with_segment(segment).is_some())
    }

    /// Crossing points of `segment` with the sides, in side order.
    #[must_use]
    pub fn intersection_with_segment(&self, segment: &Segment) -> PolygonSegmentIntersection {
        PolygonSegmentIntersection {
            points: self
                .sides
                .iter()
                .filter_map(|side| side.intersection_with_segment(segment))
                .map(|hit| hit.point)
                .collect(),
        }
    }

    #[must_use]
    pub fn contains_segment(&self, segment: &Segment) -> SegmentContainment {
        let crosses = self.has_intersection_with_segment(segment);
        let completely =
            !crosses && self.contains_point(segment.start()) && self.contains_point(segment.end());

        SegmentContainment {
            partially: crosses || completely,
            completely,
        }
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    const P_ONE: Vector = Vector::new(0.0, 0.0);
    const P_TWO: Vector = Vector::new(200.0, 0.0);
    const P_THREE: Vector = Vector::new(100.0, 300.0);

    fn triangle() -> Polygon {
        Polygon::new(vec![P_ONE, P_TWO, P_THREE]).unwrap()
    }

    fn seg_in() -> Segment {
        Segment::new(Vector::new(100.0, 50.0), Vector::new(100.0, 10.0))
    }

    fn seg_crossing() -> Segment {
        Segment::new(Vector::new(100.0, 50.0), Vector::new(100.0, -20.0))
    }

    fn seg_out() -> Segment {
        Segment::new(Vector::new(500.0, 50.0), Vector::new(500.0, 10.0))
    }

    #[test]
    fn needs_three_vertices() {
        assert!(Polygon::new(vec![P_ONE, P_TWO]).is_err());
    }

    #[test]
    fn vertices_and_sides() {
        let polygon = triangle();
        assert_eq!(polygon.vertex_count(), 3);
        assert_eq!(
            polygon.sides(),
            &[
                Segment::new(P_ONE, P_TWO),
                Segment::new(P_TWO, P_THREE),
                Segment::new(P_THREE, P_ONE),
            ]
        );
    }

    #[test]
    fn centroid() {
        assert_eq!(triangle().centroid(), Vector::new(100.0, 100.0));
    }

    #[test]
    fn signed_area_follows_orientation() {
        assert!((triangle().signed_area() - 30_000.0).abs() < TOLERANCE);
        let clockwise = Polygon::new(vec![P_THREE, P_TWO, P_ONE]).unwrap();
        assert!((clockwise.signed_area() + 30_000.0).abs() < TOLERANCE);
    }

    #[test]
    fn rect_bounds_include_a_margin() {
        let expected = Rect::make(-1.0, -1.0, 202.0, 302.0);
        assert_eq!(*triangle().rect_bounds(), expected);
    }

    #[test]
    fn point_outside_bounds() {
        assert!(!triangle().contains_point(&(500.0, 700.0)));
    }

    #[test]
    fn point_inside_bounds_but_outside_polygon() {
        assert!(!triangle().contains_point(&(190.0, 290.0)));
    }

    #[test]
    fn point_inside() {
        assert!(triangle().contains_point(&(100.0, 50.0)));
    }

    #[test]
    fn clockwise_polygon_contains_inner_point() {
        let clockwise = Polygon::new(vec![P_THREE, P_TWO, P_ONE]).unwrap();
        assert!(clockwise.contains_point(&(100.0, 50.0)));
    }

    #[test]
    fn contains_its_vertices() {
        let vertices = vec![
            Vector::ORIGIN,
            Vector::new(0.0, 300.0),
            Vector::new(100.0, 200.0),
            Vector::new(200.0, 0.0),
        ];
        let polygon = Polygon::new(vertices.clone()).unwrap();
        for vertex in &vertices {
            assert!(polygon.contains_point(vertex), "{vertex}");
        }
    }

    #[test]
    fn segment_outside_has_no_intersection() {
        let polygon = triangle();
        assert!(!polygon.has_intersection_with_segment(&seg_out()));
        let hit = polygon.intersection_with_segment(&seg_out());
        assert!(!hit.has_intersection());
        assert!(hit.points.is_empty());
    }

    #[test]
    fn segment_inside_has_no_intersection() {
        let polygon = triangle();
        assert!(!polygon.has_intersection_with_segment(&seg_in()));
        let hit = polygon.intersection_with_segment(&seg_in());
        assert!(!hit.has_intersection());
    }

    #[test]
    fn crossing_segment_intersects() {
        let polygon = triangle();
        assert!(polygon.has_intersection_with_segment(&seg_crossing()));
        let hit = polygon.intersection_with_segment(&seg_crossing());
        assert!(hit.has_intersection());
        assert_eq!(hit.points, vec![Vector::new(100.0, 0.0)]);
    }

    fn containment_of(partially: bool, completely: bool) -> SegmentContainment {
        SegmentContainment {
            partially,
            completely,
        }
    }

    #[test]
    fn segment_containment() {
        let polygon = triangle();
        let inside = polygon.contains_segment(&seg_in());
        assert_eq!(inside, containment_of(true, true));
        let crossing = polygon.contains_segment(&seg_crossing());
        assert_eq!(crossing, containment_of(true, false));
        let outside = polygon.contains_segment(&seg_out());
        assert_eq!(outside, containment_of(false, false));
    }

    #[test]
    fn segment_leaving_and_reentering_is_not_completely_contained() {
        let notched = Polygon::new(vec![
            Vector::new(0.0, 0.0),
            Vector::new(300.0, 0.0),
            Vector::new(300.0, 300.0),
            Vector::new(150.0, 100.0),
            Vector::new(0.0, 300.0),
        ])
        .unwrap();
        let segment = Segment::new(Vector::new(50.0, 150.0), Vector::new(250.0, 150.0));
        assert!(notched.contains_point(segment.start()));
        assert!(notched.contains_point(segment.end()));
        let containment = notched.contains_segment(&segment);
        assert_eq!(containment, containment_of(true, false));
    }
}
