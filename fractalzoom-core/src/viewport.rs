use serde::{Deserialize, Serialize};

/// Rectangle in logical plane coordinates.
///
/// `(x1, y1)` is the corner shown at the top-left pixel of the surface and
/// `(x2, y2)` the corner at the bottom-right. Renderers expect `x1 < x2` and
/// `y1 < y2`; the type itself does not enforce it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Viewport {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Logical width (`x2 - x1`)
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Logical height (`y2 - y1`)
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// True when both extents are finite and strictly positive.
    pub fn is_well_formed(&self) -> bool {
        let w = self.width();
        let h = self.height();
        w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0
    }
}
