use crate::math;

/// Width and height of an axis-aligned box.
#[derive(Debug, Clone, Copy, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const NIL: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Self) -> bool {
        math::are_close_enough(self.width, other.width)
            && math::are_close_enough(self.height, other.height)
    }
}
