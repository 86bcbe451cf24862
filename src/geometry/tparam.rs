use crate::error::{GeometryError, Result};
use crate::math::{self, numbers};

const MIN: f64 = 0.0;
const MAX: f64 = 1.0;

/// A position along a segment, always within `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct TParam(f64);

impl TParam {
    pub const MIN: TParam = TParam(MIN);
    pub const MIDDLE: TParam = TParam(0.5 * (MIN + MAX));
    pub const MAX: TParam = TParam(MAX);

    /// Creates a parameter from a value in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `value` lies outside
    /// `[0, 1]` (NaN included).
    pub fn new(value: f64) -> Result<Self> {
        if !Self::is_valid(value) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value,
                min: MIN,
                max: MAX,
            }
            .into());
        }
        Ok(Self(value))
    }

    /// Whether `value` lies in `[0, 1]`.
    #[must_use]
    pub fn is_valid(value: f64) -> bool {
        (MIN..=MAX).contains(&value)
    }

    /// Creates a parameter clamping `value` into `[0, 1]`.
    #[must_use]
    pub fn make_valid(value: f64) -> Self {
        Self(numbers::clamp(value, MIN, MAX))
    }

    /// Returns the parameter value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a percentage.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        100.0 * self.0 / MAX
    }
}

impl PartialEq for TParam {
    fn eq(&self, other: &Self) -> bool {
        math::are_close_enough(self.0, other.0)
    }
}

impl TryFrom<f64> for TParam {
    type Error = crate::error::GeomError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeomError;

    #[test]
    fn accepts_values_in_range() {
        let quarter = TParam::new(0.25).unwrap();
        assert!((quarter.value() - 0.25).abs() < math::TOLERANCE);
        assert_eq!(TParam::new(0.0).unwrap(), TParam::MIN);
        assert_eq!(TParam::new(1.0).unwrap(), TParam::MAX);
    }

    #[test]
    fn rejects_values_out_of_range() {
        for value in [-0.1, 1.1, f64::NAN] {
            let err = TParam::new(value).unwrap_err();
            assert!(matches!(
                err,
                GeomError::Geometry(GeometryError::ParameterOutOfRange { parameter: "t", .. })
            ));
        }
    }

    #[test]
    fn make_valid_clamps() {
        assert_eq!(TParam::make_valid(-3.0), TParam::MIN);
        assert_eq!(TParam::make_valid(7.0), TParam::MAX);
        assert_eq!(TParam::make_valid(0.5), TParam::MIDDLE);
    }

    #[test]
    fn percentage() {
        assert!((TParam::MIDDLE.percentage() - 50.0).abs() < math::TOLERANCE);
    }

    #[test]
    fn try_from_f64() {
        assert!(TParam::try_from(0.3).is_ok());
        assert!(TParam::try_from(3.0).is_err());
    }
}
