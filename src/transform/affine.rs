use std::fmt;

use nalgebra::RowVector3;

use crate::error::{Result, TransformError};
use crate::geometry::{Angle, Arc, Line, Polygon, Projectable, Rect, Segment, Size, Vector};
use crate::math::{self, solve_quadratic, Matrix3, QuadEqSolution, MATRIX_DECIMALS};

/// A 2D affine transformation.
///
/// Maps `(x, y)` to
///
/// ```text
/// x' = sx * x + shx * y + tx
/// y' = shy * x + sy * y + ty
/// ```
///
/// Coefficients within [`math::TOLERANCE`] of zero are stored as exact zeros.
#[derive(Debug, Clone, Copy)]
pub struct AffineTransf {
    sx: f64,
    sy: f64,
    tx: f64,
    ty: f64,
    shx: f64,
    shy: f64,
}

impl AffineTransf {
    pub const IDENTITY: AffineTransf = AffineTransf {
        sx: 1.0,
        sy: 1.0,
        tx: 0.0,
        ty: 0.0,
        shx: 0.0,
        shy: 0.0,
    };

    /// Mirrors over the x axis.
    pub const FLIP_Y: AffineTransf = AffineTransf {
        sx: 1.0,
        sy: -1.0,
        tx: 0.0,
        ty: 0.0,
        shx: 0.0,
        shy: 0.0,
    };

    #[must_use]
    pub fn new(sx: f64, sy: f64, tx: f64, ty: f64, shx: f64, shy: f64) -> Self {
        Self {
            sx: math::zero_or_number(sx),
            sy: math::zero_or_number(sy),
            tx: math::zero_or_number(tx),
            ty: math::zero_or_number(ty),
            shx: math::zero_or_number(shx),
            shy: math::zero_or_number(shy),
        }
    }

    /// Reads the top two rows of a homogeneous matrix.
    #[must_use]
    pub fn from_matrix3(m: &Matrix3) -> Self {
        let (sx, shx, tx) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
        let (shy, sy, ty) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
        Self::new(sx, sy, tx, ty, shx, shy)
    }

    /// Homogeneous 3x3 matrix with `[0, 0, 1]` as its last row.
    #[must_use]
    pub fn to_matrix3(&self) -> Matrix3 {
        Matrix3::from_rows(&[
            RowVector3::new(self.sx, self.shx, self.tx),
            RowVector3::new(self.shy, self.sy, self.ty),
            RowVector3::new(0.0, 0.0, 1.0),
        ])
    }

    /// Returns the x scale coefficient.
    #[must_use]
    pub fn sx(&self) -> f64 {
        self.sx
    }

    /// Returns the y scale coefficient.
    #[must_use]
    pub fn sy(&self) -> f64 {
        self.sy
    }

    /// Returns the x translation.
    #[must_use]
    pub fn tx(&self) -> f64 {
        self.tx
    }

    /// Returns the y translation.
    #[must_use]
    pub fn ty(&self) -> f64 {
        self.ty
    }

    /// Returns the x shear coefficient.
    #[must_use]
    pub fn shx(&self) -> f64 {
        self.shx
    }

    /// Returns the y shear coefficient.
    #[must_use]
    pub fn shy(&self) -> f64 {
        self.shy
    }

    /// Returns the translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vector {
        Vector::new(self.tx, self.ty)
    }

    /// Determinant of the linear part.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shx * self.shy
    }

    /// Uniform scale factor with the same area ratio as the transform.
    #[must_use]
    pub fn net_scale(&self) -> f64 {
        self.determinant().abs().sqrt()
    }

    /// Whether the determinant is not zero.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        !math::is_close_to_zero(self.determinant())
    }

    /// Roots of the characteristic polynomial of the linear part.
    #[must_use]
    pub fn eigen_values(&self) -> QuadEqSolution {
        solve_quadratic(1.0, -(self.sx + self.sy), self.determinant())
    }

    /// Column vectors of the linear part: the images of the unit axes.
    #[must_use]
    pub fn base(&self) -> [Vector; 2] {
        [
            Vector::new(self.sx, self.shy),
            Vector::new(self.shx, self.sy),
        ]
    }

    /// Angle the x axis is rotated by the transform.
    #[must_use]
    pub fn rotated_angle(&self) -> Angle {
        let [u, _] = self.base();
        u.angle_with_horizontal()
    }

    /// Maps `point` through the transform.
    #[must_use]
    pub fn apply_to_point(&self, point: &impl Projectable) -> Vector {
        let (x, y) = (point.x(), point.y());
        Vector::new(
            x * self.sx + y * self.shx + self.tx,
            x * self.shy + y * self.sy + self.ty,
        )
    }

    /// Like [`AffineTransf::apply_to_point`] but ignoring the translation.
    #[must_use]
    pub fn apply_to_vector(&self, vector: &impl Projectable) -> Vector {
        let (x, y) = (vector.x(), vector.y());
        Vector::new(x * self.sx + y * self.shx, x * self.shy + y * self.sy)
    }

    #[must_use]
    pub fn apply_to_segment(&self, segment: &Segment) -> Segment {
        Segment::new(
            self.apply_to_point(segment.start()),
            self.apply_to_point(segment.end()),
        )
    }

    #[must_use]
    pub fn apply_to_line(&self, line: &Line) -> Line {
        Line::new(
            self.apply_to_point(line.base()),
            self.apply_to_vector(line.direction()),
        )
    }

    #[must_use]
    pub fn apply_to_polygon(&self, polygon: &Polygon) -> Polygon {
        Polygon::from_valid_vertices(
            polygon
                .vertices()
                .iter()
                .map(|vertex| self.apply_to_point(vertex))
                .collect(),
        )
    }

    /// A transformed rect is no longer axis aligned, so the result is a
    /// polygon.
    #[must_use]
    pub fn apply_to_rect(&self, rect: &Rect) -> Polygon {
        self.apply_to_polygon(&rect.to_polygon())
    }

    /// Direction of the transformed unit vector at `angle`.
    #[must_use]
    pub fn apply_to_angle(&self, angle: Angle) -> Angle {
        self.apply_to_vector(&angle.as_vector()).as_angle()
    }

    /// The radius is scaled by [`AffineTransf::net_scale`].
    #[must_use]
    pub fn apply_to_arc(&self, arc: &Arc) -> Arc {
        Arc::new(
            self.apply_to_point(arc.center()),
            self.net_scale() * arc.radius(),
            self.apply_to_angle(arc.start()),
            self.apply_to_angle(arc.end()),
        )
    }

    /// Scales each dimension by the absolute axis scale, ignoring shear.
    #[must_use]
    pub fn apply_to_size(&self, size: &Size) -> Size {
        Size::new(size.width * self.sx.abs(), size.height * self.sy.abs())
    }

    /// Transform that applies `self` first and then `other`.
    #[must_use]
    pub fn append(&self, other: &AffineTransf) -> Self {
        Self::new(
            other.sx * self.sx + other.shx * self.shy,
            other.shy * self.shx + other.sy * self.sy,
            other.sx * self.tx + other.shx * self.ty + other.tx,
            other.shy * self.tx + other.sy * self.ty + other.ty,
            other.sx * self.shx + other.shx * self.sy,
            other.shy * self.sx + other.sy * self.shy,
        )
    }

    /// Transform that applies `other` first and then `self`.
    #[must_use]
    pub fn prepend(&self, other: &AffineTransf) -> Self {
        other.append(self)
    }

    /// Inverse transform.
    ///
    /// A singular transform (zero determinant) yields non-finite
    /// coefficients; check [`AffineTransf::is_invertible`] first.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let denom = self.determinant();
        if math::is_close_to_zero(denom) {
            tracing::debug!(transform = %self, "inverting a singular transform");
        }

        Self::new(
            self.sy / denom,
            self.sx / denom,
            (self.ty * self.shx - self.sy * self.tx) / denom,
            (self.tx * self.shy - self.sx * self.ty) / denom,
            -self.shx / denom,
            -self.shy / denom,
        )
    }

    /// Same transform without its translation.
    #[must_use]
    pub fn as_linear(&self) -> Self {
        if math::is_close_to_zero(self.tx) && math::is_close_to_zero(self.ty) {
            return *self;
        }
        Self::new(self.sx, self.sy, 0.0, 0.0, self.shx, self.shy)
    }

    /// `matrix(sx shy shx sy tx ty)`, as used by SVG transform attributes.
    #[must_use]
    pub fn to_svg_matrix(&self) -> String {
        format!("matrix({})", self.style_ordered_terms().join(" "))
    }

    /// `matrix(sx, shy, shx, sy, tx, ty)`, as used by CSS transforms.
    #[must_use]
    pub fn to_css_matrix(&self) -> String {
        format!("matrix({})", self.style_ordered_terms().join(", "))
    }

    fn style_ordered_terms(&self) -> [String; 6] {
        [self.sx, self.shy, self.shx, self.sy, self.tx, self.ty]
            .map(|term| format!("{term:.prec$}", prec = MATRIX_DECIMALS))
    }

    /// Appends each transform in `second` to its pair in `first`.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::SequenceLengthMismatch` if the sequences
    /// differ in length.
    pub fn combine_sequences(first: &[AffineTransf], second: &[AffineTransf]) -> Result<Vec<Self>> {
        if first.len() != second.len() {
            return Err(TransformError::SequenceLengthMismatch {
                first: first.len(),
                second: second.len(),
            }
            .into());
        }
        Ok(first.iter().zip(second).map(|(a, b)| a.append(b)).collect())
    }
}

impl Default for AffineTransf {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for AffineTransf {
    fn eq(&self, other: &Self) -> bool {
        math::are_close_enough(self.sx, other.sx)
            && math::are_close_enough(self.sy, other.sy)
            && math::are_close_enough(self.tx, other.tx)
            && math::are_close_enough(self.ty, other.ty)
            && math::are_close_enough(self.shx, other.shx)
            && math::are_close_enough(self.shy, other.shy)
    }
}

impl fmt::Display for AffineTransf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_matrix())
    }
}

impl From<Matrix3> for AffineTransf {
    fn from(m: Matrix3) -> Self {
        Self::from_matrix3(&m)
    }
}

impl From<AffineTransf> for Matrix3 {
    fn from(t: AffineTransf) -> Self {
        t.to_matrix3()
    }
}
