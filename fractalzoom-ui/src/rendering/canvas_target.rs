use fractalzoom_core::{
    fit_bounds_to_surface, NavigationError, RenderTarget, SurfaceSize, Viewport,
};
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use super::canvas_utils::{draw_pixels_to_canvas, get_2d_context};
use super::test_pattern::ruler_pattern_pixels;

/// Render target backed by an on-page canvas.
///
/// The surface size is the canvas's CSS layout size; the backing store is
/// resized to match on every render, then the request is fitted to the
/// canvas aspect ratio and the ruler pattern is painted.
pub struct CanvasTarget {
    canvas: HtmlCanvasElement,
}

impl CanvasTarget {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl RenderTarget for CanvasTarget {
    fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(
            self.canvas.client_width().max(0) as u32,
            self.canvas.client_height().max(0) as u32,
        )
    }

    fn render(
        &mut self,
        size: SurfaceSize,
        requested: &Viewport,
    ) -> Result<Viewport, NavigationError> {
        let size = size.validate()?;
        let adjusted = fit_bounds_to_surface(requested, size)?;

        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);

        let ctx = get_2d_context(&self.canvas).map_err(js_error)?;
        let pixels = ruler_pattern_pixels(&adjusted, size);
        draw_pixels_to_canvas(&ctx, &pixels, size.width, 0.0, 0.0).map_err(js_error)?;

        Ok(adjusted)
    }
}

fn js_error(err: JsValue) -> NavigationError {
    NavigationError::Render(format!("{err:?}"))
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mounted_canvas(width: &str, height: &str) -> HtmlCanvasElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        let style = canvas.style();
        style.set_property("display", "block").unwrap();
        style.set_property("width", width).unwrap();
        style.set_property("height", height).unwrap();
        document.body().unwrap().append_child(&canvas).unwrap();
        canvas
    }

    #[wasm_bindgen_test]
    fn test_collapsed_canvas_is_invalid_surface() {
        let mut target = CanvasTarget::new(mounted_canvas("0px", "0px"));

        let size = target.surface_size();
        let err = target
            .render(size, &Viewport::new(-2.0, -1.5, 1.0, 1.5))
            .unwrap_err();

        assert!(matches!(
            err,
            NavigationError::InvalidSurface { width: 0, height: 0 }
        ));
    }

    #[wasm_bindgen_test]
    fn test_render_fits_bounds_and_sizes_backing_store() {
        let canvas = mounted_canvas("800px", "600px");
        let mut target = CanvasTarget::new(canvas.clone());

        let size = target.surface_size();
        assert_eq!(size, SurfaceSize::new(800, 600));

        let adjusted = target
            .render(size, &Viewport::new(-2.0, -1.5, 1.0, 1.5))
            .unwrap();

        assert!((adjusted.x1 - (-2.5)).abs() < 1e-12);
        assert!((adjusted.y1 - (-1.5)).abs() < 1e-12);
        assert!((adjusted.x2 - 1.5).abs() < 1e-12);
        assert!((adjusted.y2 - 1.5).abs() < 1e-12);
        assert_eq!(canvas.width(), 800);
        assert_eq!(canvas.height(), 600);
    }
}
