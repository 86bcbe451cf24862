pub mod intersect_2d;
pub mod numbers;
pub mod polygon_2d;
pub mod quadratic;

pub use numbers::{are_close_enough, is_close_to_one, is_close_to_zero, sign, zero_or_number};
pub use quadratic::{solve_quadratic, ComplexNumber, QuadEqSolution};

/// 2D point type used for interop with nalgebra.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type used for interop with nalgebra.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous matrix for 2D affine transformations.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default maximum distance for a point to count as lying on a segment.
pub const CONTAINMENT_DISTANCE: f64 = 1e-5;

/// Margin added around a polygon's vertices to build its bounding rect.
pub const POLYGON_BOUNDS_MARGIN: f64 = 1.0;

/// Decimal places used when formatting transform matrices.
pub const MATRIX_DECIMALS: usize = 3;
