#![allow(dead_code)]

use fractalzoom_core::{
    fit_bounds_to_surface, NavigationError, RenderTarget, SurfaceSize, Viewport,
};

/// Deterministic render target that fits requests to the surface aspect
/// ratio and records every request it receives.
pub struct RecordingTarget {
    pub size: SurfaceSize,
    pub fit_aspect: bool,
    pub requests: Vec<(SurfaceSize, Viewport)>,
}

impl RecordingTarget {
    /// Echoes requests back unchanged
    pub fn exact(width: u32, height: u32) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
            fit_aspect: false,
            requests: Vec::new(),
        }
    }

    /// Adjusts requests to the surface aspect ratio
    pub fn fitting(width: u32, height: u32) -> Self {
        Self {
            fit_aspect: true,
            ..Self::exact(width, height)
        }
    }
}

impl RenderTarget for RecordingTarget {
    fn surface_size(&self) -> SurfaceSize {
        self.size
    }

    fn render(
        &mut self,
        size: SurfaceSize,
        requested: &Viewport,
    ) -> Result<Viewport, NavigationError> {
        let size = size.validate()?;
        self.requests.push((size, *requested));
        if self.fit_aspect {
            fit_bounds_to_surface(requested, size)
        } else {
            Ok(*requested)
        }
    }
}

pub fn assert_viewport_close(actual: &Viewport, expected: &Viewport) {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-12;
    assert!(
        close(actual.x1, expected.x1)
            && close(actual.y1, expected.y1)
            && close(actual.x2, expected.x2)
            && close(actual.y2, expected.y2),
        "expected {expected:?}, got {actual:?}"
    );
}
