use crate::error::{GeometryError, Result};
use crate::math::polygon_2d;

use super::{Line, Polygon, Projectable, Segment, Size, Vector};

/// An axis-aligned rectangle with `origin` at its bottom-left corner.
///
/// The `y` axis points up: `bottom == origin.y` and `top == origin.y + height`.
/// Containment queries exclude the boundary.
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    origin: Vector,
    size: Size,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Rect {
    pub const NIL: Rect = Rect {
        origin: Vector::ORIGIN,
        size: Size::NIL,
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    #[must_use]
    pub fn new(origin: Vector, size: Size) -> Self {
        Self {
            origin,
            size,
            left: origin.x,
            right: origin.x + size.width,
            top: origin.y + size.height,
            bottom: origin.y,
        }
    }

    /// Shorthand for [`Rect::new`] from plain coordinates.
    #[must_use]
    pub fn make(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Vector::new(x, y), Size::new(width, height))
    }

    /// Smallest rect containing every point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyPointSet` if `points` is empty.
    pub fn containing_points<P: Projectable>(points: &[P]) -> Result<Self> {
        let bounds = polygon_2d::bounds(points);
        let (min, max) = bounds.ok_or(GeometryError::EmptyPointSet)?;
        Ok(Self::new(min, Size::new(max.x - min.x, max.y - min.y)))
    }

    /// Like [`Rect::containing_points`], grown by `margin` on every side.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyPointSet` if `points` is empty.
    pub fn containing_points_and_margin<P: Projectable>(points: &[P], margin: f64) -> Result<Self> {
        Ok(Self::containing_points(points)?.with_margin(margin))
    }

    /// Grows `rect` so it also contains `points`. With no rect the result
    /// bounds the points alone.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyPointSet` if `rect` is `None` and
    /// `points` is empty.
    pub fn including_points<P: Projectable>(rect: Option<&Rect>, points: &[P]) -> Result<Self> {
        let mut all: Vec<Vector> = points.iter().map(Projectable::to_vector).collect();
        if let Some(rect) = rect {
            all.push(rect.origin);
            all.push(Vector::new(rect.right, rect.top));
        }
        Self::containing_points(&all)
    }

    /// Rect of the given dimensions centered at `center`.
    #[must_use]
    pub fn centered(center: &impl Projectable, width: f64, height: f64) -> Self {
        let origin = Vector::new(center.x() - 0.5 * width, center.y() - 0.5 * height);
        Self::new(origin, Size::new(width, height))
    }

    /// Bottom-left corner.
    #[must_use]
    pub fn origin(&self) -> &Vector {
        &self.origin
    }

    /// Width and height of the rect.
    #[must_use]
    pub fn size(&self) -> &Size {
        &self.size
    }

    /// Returns the x coordinate of the left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the x coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the y coordinate of the top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Returns the y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Returns the area enclosed by the rect.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.size.width * self.size.height
    }

    /// Returns the length of the rect's boundary.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.size.width + self.size.height)
    }

    /// Returns the point half way between the corners.
    #[must_use]
    pub fn center(&self) -> Vector {
        Vector::new(
            self.origin.x + 0.5 * self.size.width,
            self.origin.y + 0.5 * self.size.height,
        )
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn corner(&self) -> Vector {
        Vector::new(self.right, self.bottom)
    }

    /// Whether `point` lies strictly inside the rect.
    #[must_use]
    pub fn contains_point(&self, point: &impl Projectable) -> bool {
        let (x, y) = (point.x(), point.y());
        x > self.left && x < self.right && y > self.bottom && y < self.top
    }

    /// Whether both ends of `segment` lie strictly inside the rect.
    #[must_use]
    pub fn contains_segment(&self, segment: &Segment) -> bool {
        self.contains_point(segment.start()) && self.contains_point(segment.end())
    }

    /// Points where `line` crosses the rect's edges.
    ///
    /// Horizontal and vertical lines yield the two edge points when they lie
    /// within the bounds (edges included). Any other line is tested against
    /// the left, right, bottom and top edges in that order, keeping crossings
    /// strictly inside each edge.
    #[must_use]
    pub fn intersection_with_line(&self, line: &Line) -> Vec<Vector> {
        if line.is_horizontal() {
            let y = line.base().y;
            if y < self.bottom || y > self.top {
                return Vec::new();
            }
            return vec![Vector::new(self.left, y), Vector::new(self.right, y)];
        }

        if line.is_vertical() {
            let x = line.base().x;
            if x < self.left || x > self.right {
                return Vec::new();
            }
            return vec![Vector::new(x, self.bottom), Vector::new(x, self.top)];
        }

        let within_y = |y: &f64| *y > self.bottom && *y < self.top;
        let within_x = |x: &f64| *x > self.left && *x < self.right;

        let mut points = Vec::with_capacity(2);
        if let Some(y) = line.y_at_x(self.left).filter(within_y) {
            points.push(Vector::new(self.left, y));
        }
        if let Some(y) = line.y_at_x(self.right).filter(within_y) {
            points.push(Vector::new(self.right, y));
        }
        if let Some(x) = line.x_at_y(self.bottom).filter(within_x) {
            points.push(Vector::new(x, self.bottom));
        }
        if let Some(x) = line.x_at_y(self.top).filter(within_x) {
            points.push(Vector::new(x, self.top));
        }
        points
    }

    /// Segment joining the first two edge crossings of `line`, if any.
    #[must_use]
    pub fn intersection_segment_with_line(&self, line: &Line) -> Option<Segment> {
        match self.intersection_with_line(line).as_slice() {
            [start, end, ..] => Some(Segment::new(*start, *end)),
            _ => None,
        }
    }

    /// Counter-clockwise polygon starting at the origin.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from_valid_vertices(vec![
            self.origin,
            Vector::new(self.right, self.bottom),
            Vector::new(self.right, self.top),
            Vector::new(self.left, self.top),
        ])
    }

    /// Rect grown by `margin` on every side.
    #[must_use]
    pub fn with_margin(&self, margin: f64) -> Self {
        let two_margins = 2.0 * margin;
        Self::new(
            Vector::new(self.left - margin, self.bottom - margin),
            Size::new(
                self.size.width + two_margins,
                self.size.height + two_margins,
            ),
        )
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.size == other.size
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn rect() -> Rect {
        Rect::make(2.0, 4.0, 10.0, 20.0)
    }

    fn assert_points(actual: &[Vector], expected: &[Vector]) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn edges_and_measures() {
        let r = rect();
        assert_eq!(*r.origin(), Vector::new(2.0, 4.0));
        assert_eq!(*r.size(), Size::new(10.0, 20.0));
        assert!((r.left() - 2.0).abs() < TOLERANCE);
        assert!((r.top() - 24.0).abs() < TOLERANCE);
        assert!((r.right() - 12.0).abs() < TOLERANCE);
        assert!((r.bottom() - 4.0).abs() < TOLERANCE);
        assert!((r.area() - 200.0).abs() < TOLERANCE);
        assert!((r.perimeter() - 60.0).abs() < TOLERANCE);
        assert_eq!(r.center(), Vector::new(7.0, 14.0));
        assert_eq!(r.corner(), Vector::new(12.0, 4.0));
    }

    #[test]
    fn converts_to_polygon() {
        let expected = Polygon::new(vec![
            Vector::new(2.0, 4.0),
            Vector::new(12.0, 4.0),
            Vector::new(12.0, 24.0),
            Vector::new(2.0, 24.0),
        ])
        .unwrap();
        assert_eq!(rect().to_polygon(), expected);
    }

    #[test]
    fn grows_by_margin() {
        let grown = Rect::make(0.0, 0.0, 30.0, 10.0).with_margin(5.0);
        assert_eq!(grown, Rect::make(-5.0, -5.0, 40.0, 20.0));
    }

    #[test]
    fn contains_inner_points_only() {
        let r = rect();
        assert!(!r.contains_point(&(500.0, 700.0)));
        assert!(r.contains_point(&(7.0, 14.0)));
        assert!(!r.contains_point(&(2.0, 14.0)));
        assert!(!r.contains_point(&(7.0, 24.0)));
    }

    #[test]
    fn contains_segment_with_both_ends_inside() {
        let r = rect();
        let (start, inside) = (Vector::new(5.0, 7.0), Vector::new(7.0, 14.0));
        let (far, outside) = (Vector::new(70.0, 140.0), Vector::new(50.0, 70.0));
        assert!(r.contains_segment(&Segment::new(start, inside)));
        assert!(!r.contains_segment(&Segment::new(start, far)));
        assert!(!r.contains_segment(&Segment::new(outside, inside)));
    }

    #[test]
    fn horizontal_line_outside() {
        let r = rect();
        assert!(r.intersection_with_line(&Line::horizontal(0.0)).is_empty());
        assert!(r.intersection_with_line(&Line::horizontal(50.0)).is_empty());
    }

    #[test]
    fn horizontal_line_crossing() {
        let line = Line::new(Vector::new(0.0, 10.0), Vector::I_VERSOR);
        let points = rect().intersection_with_line(&line);
        assert_points(&points, &[Vector::new(2.0, 10.0), Vector::new(12.0, 10.0)]);
    }

    #[test]
    fn horizontal_line_on_the_edge() {
        let points = rect().intersection_with_line(&Line::horizontal(4.0));
        assert_points(&points, &[Vector::new(2.0, 4.0), Vector::new(12.0, 4.0)]);
    }

    #[test]
    fn vertical_line_outside() {
        let r = rect();
        assert!(r.intersection_with_line(&Line::vertical(0.0)).is_empty());
        assert!(r.intersection_with_line(&Line::vertical(50.0)).is_empty());
    }

    #[test]
    fn vertical_line_crossing() {
        let line = Line::new(Vector::new(5.0, 10.0), Vector::J_VERSOR);
        let points = rect().intersection_with_line(&line);
        assert_points(&points, &[Vector::new(5.0, 4.0), Vector::new(5.0, 24.0)]);
    }

    #[test]
    fn oblique_line_missing_the_rect() {
        let line = Line::new(Vector::new(15.0, 4.0), Vector::new(1.0, 1.0));
        assert!(rect().intersection_with_line(&line).is_empty());
    }

    #[test]
    fn oblique_line_bottom_and_right() {
        let line = Line::new(Vector::new(10.0, 4.0), Vector::new(1.0, 1.0));
        let points = rect().intersection_with_line(&line);
        assert_points(&points, &[Vector::new(12.0, 6.0), Vector::new(10.0, 4.0)]);
    }

    #[test]
    fn oblique_line_bottom_and_left() {
        let (bottom, left) = (Vector::new(4.0, 4.0), Vector::new(2.0, 6.0));
        let line = Line::between(&bottom, &left);
        let points = rect().intersection_with_line(&line);
        assert_points(&points, &[left, bottom]);
    }

    #[test]
    fn oblique_line_top_and_right() {
        let (top, right) = (Vector::new(10.0, 24.0), Vector::new(12.0, 22.0));
        let points = rect().intersection_with_line(&Line::between(&top, &right));
        assert_points(&points, &[right, top]);
    }

    #[test]
    fn oblique_line_top_and_left() {
        let (top, left) = (Vector::new(4.0, 24.0), Vector::new(2.0, 22.0));
        let points = rect().intersection_with_line(&Line::between(&top, &left));
        assert_points(&points, &[left, top]);
    }

    #[test]
    fn oblique_line_left_and_right() {
        let (right, left) = (Vector::new(12.0, 23.0), Vector::new(2.0, 22.0));
        let points = rect().intersection_with_line(&Line::between(&right, &left));
        assert_points(&points, &[left, right]);
    }

    #[test]
    fn oblique_line_bottom_and_top() {
        let (top, bottom) = (Vector::new(4.0, 24.0), Vector::new(3.0, 4.0));
        let points = rect().intersection_with_line(&Line::between(&top, &bottom));
        assert_points(&points, &[bottom, top]);
    }

    #[test]
    fn crossing_segment() {
        let r = rect();
        let line = Line::new(Vector::new(10.0, 4.0), Vector::new(1.0, 1.0));
        let segment = r.intersection_segment_with_line(&line).unwrap();
        let expected = Segment::new(Vector::new(12.0, 6.0), Vector::new(10.0, 4.0));
        assert_eq!(segment, expected);
        let above = Line::horizontal(100.0);
        assert!(r.intersection_segment_with_line(&above).is_none());
    }

    #[test]
    fn empty_point_set_has_no_bounds() {
        assert!(Rect::containing_points::<Vector>(&[]).is_err());
    }

    #[test]
    fn bounds_of_points() {
        let points = [(0.0, 5.0), (10.0, 0.0), (5.0, 7.0)];
        let bounds = Rect::containing_points(&points).unwrap();
        assert_eq!(bounds, Rect::make(0.0, 0.0, 10.0, 7.0));
        assert_eq!(
            Rect::containing_points_and_margin(&points, 1.0).unwrap(),
            Rect::make(-1.0, -1.0, 12.0, 9.0)
        );
    }

    #[test]
    fn grows_to_include_points() {
        let original = Rect::containing_points(&[(0.0, 5.0), (10.0, 0.0)]).unwrap();
        let above = [(5.0, 7.0)];
        let grown = Rect::including_points(Some(&original), &above).unwrap();
        assert_eq!(grown, Rect::make(0.0, 0.0, 10.0, 7.0));
    }

    #[test]
    fn including_points_keeps_the_whole_rect() {
        let original = Rect::make(0.0, 0.0, 10.0, 10.0);
        let below = [(5.0, -2.0)];
        let grown = Rect::including_points(Some(&original), &below).unwrap();
        assert_eq!(grown, Rect::make(0.0, -2.0, 10.0, 12.0));
    }

    #[test]
    fn without_rect_includes_points_only() {
        let points = [(10.0, 0.0), (5.0, 7.0)];
        let grown = Rect::including_points(None, &points).unwrap();
        assert_eq!(grown, Rect::make(5.0, 0.0, 5.0, 7.0));
        assert!(Rect::including_points::<Vector>(None, &[]).is_err());
    }

    #[test]
    fn degenerate_rect_at_origin_still_counts() {
        let dot = Rect::containing_points(&[(0.0, 0.0)]).unwrap();
        assert_eq!(dot, Rect::NIL);
        let grown = Rect::including_points(Some(&dot), &[(5.0, 5.0)]).unwrap();
        assert_eq!(grown, Rect::make(0.0, 0.0, 5.0, 5.0));
    }

    #[test]
    fn rect_alone_is_kept() {
        let original = rect();
        let no_points: [Vector; 0] = [];
        let grown = Rect::including_points(Some(&original), &no_points).unwrap();
        assert_eq!(grown, original);
    }

    #[test]
    fn centered_at_point() {
        assert_eq!(
            Rect::centered(&(5.0, 10.0), 20.0, 40.0),
            Rect::make(-5.0, -10.0, 20.0, 40.0)
        );
    }
}
