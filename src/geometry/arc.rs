use crate::math;

use super::{Angle, Segment, Vector};

/// A circular arc swept from `start` to `end` around `center`.
///
/// The two radii are kept as segments going from the center to each end
/// point of the arc.
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    center: Vector,
    radius: f64,
    start: Angle,
    end: Angle,
    start_segment: Segment,
    end_segment: Segment,
}

impl Arc {
    #[must_use]
    pub fn new(center: Vector, radius: f64, start: Angle, end: Angle) -> Self {
        let radius_towards = |angle: Angle| {
            Segment::new(center, center.displaced(&angle.as_vector(), radius))
        };

        Self {
            center,
            radius,
            start,
            end,
            start_segment: radius_towards(start),
            end_segment: radius_towards(end),
        }
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Vector {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the angle where the arc starts.
    #[must_use]
    pub fn start(&self) -> Angle {
        self.start
    }

    /// Returns the angle where the arc ends.
    #[must_use]
    pub fn end(&self) -> Angle {
        self.end
    }

    /// Radius from the center to the start point.
    #[must_use]
    pub fn start_segment(&self) -> &Segment {
        &self.start_segment
    }

    /// Radius from the center to the end point.
    #[must_use]
    pub fn end_segment(&self) -> &Segment {
        &self.end_segment
    }

    /// Returns the point where the arc starts.
    #[must_use]
    pub fn start_point(&self) -> &Vector {
        self.start_segment.end()
    }

    /// Returns the point where the arc ends.
    #[must_use]
    pub fn end_point(&self) -> &Vector {
        self.end_segment.end()
    }

    /// Signed angle swept from the start radius to the end radius.
    #[must_use]
    pub fn angle_from_start_to_end(&self) -> Angle {
        self.start_segment
            .direction_versor()
            .angle_to(self.end_segment.direction_versor())
    }

    /// Signed angle swept from the end radius to the start radius.
    #[must_use]
    pub fn angle_from_end_to_start(&self) -> Angle {
        self.end_segment
            .direction_versor()
            .angle_to(self.start_segment.direction_versor())
    }

    /// Normal to the start radius pointing away from the arc.
    #[must_use]
    pub fn start_point_normal_dir(&self) -> Vector {
        let quarter = if self.angle_from_end_to_start().sign() > 0.0 {
            Angle::PI_HALF
        } else {
            Angle::MINUS_PI_HALF
        };
        self.start_segment.direction_versor().rotated(quarter)
    }

    /// Normal to the end radius pointing away from the arc.
    #[must_use]
    pub fn end_point_normal_dir(&self) -> Vector {
        let quarter = if self.angle_from_start_to_end().sign() > 0.0 {
            Angle::PI_HALF
        } else {
            Angle::MINUS_PI_HALF
        };
        self.end_segment.direction_versor().rotated(quarter)
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center
            && math::are_close_enough(self.radius, other.radius)
            && self.start == other.start
            && self.end == other.end
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn quarter_arc() -> Arc {
        Arc::new(Vector::new(1.0, 1.0), 2.0, Angle::ZERO, Angle::PI_HALF)
    }

    #[test]
    fn end_points() {
        let arc = quarter_arc();
        assert_eq!(*arc.start_point(), Vector::new(3.0, 1.0));
        assert_eq!(*arc.end_point(), Vector::new(1.0, 3.0));
        assert_eq!(*arc.start_segment().start(), Vector::new(1.0, 1.0));
    }

    #[test]
    fn sweep_angles() {
        let arc = quarter_arc();
        let forward = arc.angle_from_start_to_end();
        assert_relative_eq!(forward.degrees(), 90.0, epsilon = 1e-9);
        let backward = arc.angle_from_end_to_start();
        assert_relative_eq!(backward.degrees(), -90.0, epsilon = 1e-9);
    }

    #[test]
    fn normals_point_out_of_the_arc() {
        let arc = quarter_arc();
        assert_eq!(arc.start_point_normal_dir(), Vector::MINUS_J_VERSOR);
        assert_eq!(arc.end_point_normal_dir(), Vector::MINUS_I_VERSOR);
    }

    #[test]
    fn equality() {
        let center = Vector::new(1.0, 1.0);
        let full_turn = Arc::new(center, 2.0, Angle::TWO_PI, Angle::from_degrees(90.0));
        assert_eq!(quarter_arc(), full_turn);
        let wider = Arc::new(center, 3.0, Angle::ZERO, Angle::PI_HALF);
        assert_ne!(quarter_arc(), wider);
    }
}
