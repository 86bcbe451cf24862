use thiserror::Error;

/// Top-level error type for the geom2d crate.
#[derive(Debug, Error)]
pub enum GeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("a polygon needs at least three vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("can't bound an empty set of points")]
    EmptyPointSet,
}

/// Errors from the numeric helpers.
#[derive(Debug, Error)]
pub enum NumericError {
    #[error("expected the number of divisions ({divisions}) to be a positive number")]
    NonPositiveDivisions { divisions: u32 },
}

/// Errors related to transform composition.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("sequences should have the same length to be combined ({first} != {second})")]
    SequenceLengthMismatch { first: usize, second: usize },
}

/// Convenience type alias for results using [`GeomError`].
pub type Result<T> = std::result::Result<T, GeomError>;
