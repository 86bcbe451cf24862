use crate::math::{self, intersect_2d, CONTAINMENT_DISTANCE};

use super::intersection::{SegmentIntersection, SegmentLineIntersection};
use super::{vectors, Circle, Line, Projectable, Quadrant, Rect, Size, TParam, Vector};

/// Closest point on a segment to some query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    pub point: Vector,
    pub t: TParam,
}

/// A bounded straight segment from `start` to `end`.
///
/// Every derived quantity is computed once at construction.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    start: Vector,
    end: Vector,
    middle: Vector,
    length: f64,
    width: f64,
    height: f64,
    direction_vector: Vector,
    direction_versor: Vector,
    normal_versor: Vector,
}

impl Segment {
    #[must_use]
    pub fn new(start: Vector, end: Vector) -> Self {
        let direction_vector = vectors::between(&start, &end);
        let direction_versor = direction_vector.normalized();
        Self {
            start,
            end,
            middle: vectors::point_half_way(&start, &end),
            length: start.distance_to(&end),
            width: (end.x - start.x).abs(),
            height: (end.y - start.y).abs(),
            direction_vector,
            direction_versor,
            normal_versor: direction_versor.perpendicular(),
        }
    }

    #[must_use]
    pub fn between(start: &impl Projectable, end: &impl Projectable) -> Self {
        Self::new(start.to_vector(), end.to_vector())
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> &Vector {
        &self.start
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> &Vector {
        &self.end
    }

    /// Returns the point half way between the ends.
    #[must_use]
    pub fn middle(&self) -> &Vector {
        &self.middle
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Horizontal extent of the segment.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent of the segment.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// `end - start`.
    #[must_use]
    pub fn direction_vector(&self) -> &Vector {
        &self.direction_vector
    }

    /// Returns the unit direction from start to end.
    #[must_use]
    pub fn direction_versor(&self) -> &Vector {
        &self.direction_versor
    }

    /// Direction versor rotated a quarter turn counter-clockwise.
    #[must_use]
    pub fn normal_versor(&self) -> &Vector {
        &self.normal_versor
    }

    /// Quadrant the segment's direction points into.
    #[must_use]
    pub fn quadrant(&self) -> Quadrant {
        self.direction_vector.as_angle().quadrant()
    }

    /// Axis-aligned bounds of the segment.
    #[must_use]
    pub fn rect_bounds(&self) -> Rect {
        let origin = Vector::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y));
        Rect::new(origin, Size::new(self.width, self.height))
    }

    /// Smallest circle containing the segment.
    #[must_use]
    pub fn circle_bounds(&self) -> Circle {
        Circle::new(self.middle, 0.5 * self.length)
    }

    /// Infinite line through the segment.
    #[must_use]
    pub fn as_line(&self) -> Line {
        Line::new(self.start, self.direction_vector)
    }

    /// Point at parameter `t`, `0` being the start and `1` the end.
    #[must_use]
    pub fn point_at(&self, t: TParam) -> Vector {
        self.start.displaced(&self.direction_vector, t.value())
    }

    /// Copy of the segment displaced `distance` units along its normal.
    #[must_use]
    pub fn parallel_at_distance(&self, distance: f64) -> Self {
        Self::new(
            self.start.displaced(&self.normal_versor, distance),
            self.end.displaced(&self.normal_versor, distance),
        )
    }

    /// Returns the segment with its endpoints in [`vectors::compare`] order.
    #[must_use]
    pub fn with_ordered_points(&self) -> Self {
        if vectors::compare(&self.start, &self.end).is_le() {
            *self
        } else {
            self.flipped()
        }
    }

    /// Same segment going from end to start.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Closest point on the segment to `point`, clamped to the endpoints.
    #[must_use]
    pub fn closest_point_to(&self, point: &impl Projectable) -> ClosestPoint {
        if math::is_close_to_zero(self.length) {
            return ClosestPoint {
                point: self.start,
                t: TParam::MIN,
            };
        }

        let to_point = vectors::between(&self.start, point);
        let projection = to_point.projected_over(&self.direction_versor);
        if projection < 0.0 {
            return ClosestPoint {
                point: self.start,
                t: TParam::MIN,
            };
        }
        if projection > self.length {
            return ClosestPoint {
                point: self.end,
                t: TParam::MAX,
            };
        }

        ClosestPoint {
            point: self.start.displaced(&self.direction_versor, projection),
            t: TParam::make_valid(projection / self.length),
        }
    }

    #[must_use]
    pub fn distance_to_point(&self, point: &impl Projectable) -> f64 {
        self.closest_point_to(point).point.distance_to(point)
    }

    /// Closest point on the segment if `point` lies within
    /// [`CONTAINMENT_DISTANCE`] of it.
    #[must_use]
    pub fn contains_point(&self, point: &impl Projectable) -> Option<ClosestPoint> {
        self.contains_point_within(point, CONTAINMENT_DISTANCE)
    }

    /// Closest point on the segment if `point` lies within `max_distance` of it.
    #[must_use]
    pub fn contains_point_within(
        &self,
        point: &impl Projectable,
        max_distance: f64,
    ) -> Option<ClosestPoint> {
        let closest = self.closest_point_to(point);
        (closest.point.distance_to(point) <= max_distance).then_some(closest)
    }

    /// Crossing point with `other`.
    ///
    /// Parallel segments report `None`, even when they overlap.
    #[must_use]
    pub fn intersection_with_segment(&self, other: &Segment) -> Option<SegmentIntersection> {
        let direction = &self.direction_vector;
        if direction.is_parallel_to(&other.direction_vector) {
            tracing::trace!(
                start = %self.start,
                other_start = %other.start,
                "parallel segments, no intersection"
            );
            return None;
        }

        let (t1, t2) = intersect_2d::segment_segment_params(
            &self.start,
            &self.direction_vector,
            &other.start,
            &other.direction_vector,
        )?;
        let t1 = TParam::make_valid(t1);

        Some(SegmentIntersection {
            point: self.point_at(t1),
            t1,
            t2: TParam::make_valid(t2),
        })
    }

    /// Crossing point of the segment with an infinite line.
    #[must_use]
    pub fn intersection_with_line(&self, line: &Line) -> Option<SegmentLineIntersection> {
        let point = self.as_line().intersection_with(line)?;
        let ClosestPoint { t, .. } = self.contains_point(&point)?;
        Some(SegmentLineIntersection { point, t1: t })
    }

    /// Splits the segment at `t`; splitting at either end yields a
    /// zero-length piece.
    #[must_use]
    pub fn split(&self, t: TParam) -> (Segment, Segment) {
        let p = self.point_at(t);
        (Self::new(self.start, p), Self::new(p, self.end))
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}
