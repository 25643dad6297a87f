use serde::{Deserialize, Serialize};

use crate::NavigationError;

/// Drawing surface extent in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A surface can only be rendered when both extents are non-zero.
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns `self` if drawable, otherwise `InvalidSurface`.
    pub fn validate(self) -> Result<Self, NavigationError> {
        if self.is_drawable() {
            Ok(self)
        } else {
            Err(NavigationError::InvalidSurface {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Normalized selection rectangle in surface pixels.
///
/// `left`/`top` is always the top-left corner and the extents are never
/// negative, whichever direction the pointer was dragged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionRect {
    /// Rectangle spanned by two opposite corners given in any order.
    pub fn spanning(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            left: a.0.min(b.0),
            top: a.1.min(b.1),
            width: (a.0 - b.0).abs(),
            height: (a.1 - b.1).abs(),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Squared length of the diagonal
    pub fn diagonal_sq(&self) -> f64 {
        self.width * self.width + self.height * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_size_drawable() {
        assert!(SurfaceSize::new(800, 600).is_drawable());
        assert!(!SurfaceSize::new(0, 600).is_drawable());
        assert!(!SurfaceSize::new(800, 0).is_drawable());
    }

    #[test]
    fn test_surface_size_validate_rejects_empty() {
        let err = SurfaceSize::new(0, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            NavigationError::InvalidSurface {
                width: 0,
                height: 0
            }
        ));
    }

    #[test]
    fn test_surface_aspect_ratio() {
        assert!((SurfaceSize::new(800, 600).aspect_ratio() - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(SurfaceSize::new(500, 500).aspect_ratio(), 1.0);
    }

    #[test]
    fn test_selection_spanning_normalizes_corners() {
        let rect = SelectionRect::spanning((450.0, 350.0), (400.0, 300.0));

        assert_eq!(rect.left, 400.0);
        assert_eq!(rect.top, 300.0);
        assert_eq!(rect.width, 50.0);
        assert_eq!(rect.height, 50.0);
        assert_eq!(rect.right(), 450.0);
        assert_eq!(rect.bottom(), 350.0);
    }

    #[test]
    fn test_selection_mixed_direction() {
        // Dragged up and to the right
        let rect = SelectionRect::spanning((100.0, 200.0), (160.0, 120.0));

        assert_eq!(rect, SelectionRect {
            left: 100.0,
            top: 120.0,
            width: 60.0,
            height: 80.0,
        });
        assert_eq!(rect.diagonal_sq(), 10_000.0);
    }
}
