use crate::{NavigationError, SurfaceSize, Viewport};

/// A drawing surface plus the engine that paints it.
///
/// The controller reads `surface_size` at the start of every request and
/// passes it back to `render`, so the size is never cached between calls.
pub trait RenderTarget {
    /// Current pixel extent of the surface
    fn surface_size(&self) -> SurfaceSize;

    /// Paints `requested` onto the surface and returns the bounds actually
    /// drawn, which may differ (e.g. after aspect-ratio correction).
    ///
    /// Must fail with `InvalidSurface` when either extent of `size` is zero.
    fn render(&mut self, size: SurfaceSize, requested: &Viewport)
        -> Result<Viewport, NavigationError>;
}
