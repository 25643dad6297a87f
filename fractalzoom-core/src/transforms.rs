use crate::surface::{SelectionRect, SurfaceSize};
use crate::viewport::Viewport;
use crate::NavigationError;

/// Converts surface pixel positions into logical plane coordinates
///
/// Built from the viewport currently on screen and the surface size read at
/// the moment of the conversion. Only screen -> logical is provided; nothing
/// in the navigation flow needs the inverse.
///
/// `to_logical_x(px)` evaluates `x1 + (x2 - x1) * (px / W)`. That is the same
/// quantity as `x1 + px * x_ratio()` and agrees with it up to floating-point
/// rounding; the fraction form is exact at `px = 0` and
/// `px = W`, so surface edges map onto `x1` and `x2`. Likewise for y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    viewport: Viewport,
    size: SurfaceSize,
}

impl CoordinateMapper {
    /// Fails with `InvalidSurface` when either surface extent is zero.
    pub fn new(viewport: Viewport, size: SurfaceSize) -> Result<Self, NavigationError> {
        let size = size.validate()?;
        Ok(Self { viewport, size })
    }

    /// Logical units per pixel along x
    pub fn x_ratio(&self) -> f64 {
        self.viewport.width() / self.size.width as f64
    }

    /// Logical units per pixel along y
    pub fn y_ratio(&self) -> f64 {
        self.viewport.height() / self.size.height as f64
    }

    pub fn to_logical_x(&self, px: f64) -> f64 {
        self.viewport.x1 + self.viewport.width() * (px / self.size.width as f64)
    }

    pub fn to_logical_y(&self, py: f64) -> f64 {
        self.viewport.y1 + self.viewport.height() * (py / self.size.height as f64)
    }

    pub fn to_logical(&self, px: f64, py: f64) -> (f64, f64) {
        (self.to_logical_x(px), self.to_logical_y(py))
    }

    /// Logical rectangle covered by a selection on the surface
    pub fn map_selection(&self, rect: &SelectionRect) -> Viewport {
        let (x1, y1) = self.to_logical(rect.left, rect.top);
        let (x2, y2) = self.to_logical(rect.right(), rect.bottom());
        Viewport::new(x1, y1, x2, y2)
    }
}

/// Expands `requested` along one axis so it has the surface's aspect ratio.
///
/// The axis that already fills the surface is kept as is; the other one is
/// grown symmetrically around its midpoint. Render targets call this before
/// painting and report the result as their adjusted bounds.
pub fn fit_bounds_to_surface(
    requested: &Viewport,
    size: SurfaceSize,
) -> Result<Viewport, NavigationError> {
    let size = size.validate()?;
    let surface_ratio = size.aspect_ratio();
    let target_ratio = requested.width() / requested.height();

    if surface_ratio < target_ratio {
        // Surface is taller than the request: keep x, grow y
        let mid = (requested.y1 + requested.y2) / 2.0;
        let half = requested.width() / surface_ratio / 2.0;
        Ok(Viewport::new(
            requested.x1,
            mid - half,
            requested.x2,
            mid + half,
        ))
    } else {
        // Surface is wider than the request: keep y, grow x
        let mid = (requested.x1 + requested.x2) / 2.0;
        let half = requested.height() * surface_ratio / 2.0;
        Ok(Viewport::new(
            mid - half,
            requested.y1,
            mid + half,
            requested.y2,
        ))
    }
}
