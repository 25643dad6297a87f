//! Coordinate ruler painted in place of a fractal.
//!
//! Draws axes, origin and three levels of tick lines in logical
//! coordinates, so every zoom visibly lands where the selection was drawn.

use fractalzoom_core::{CoordinateMapper, SurfaceSize, Viewport};

/// Colors for the test pattern (RGBA)
pub const BACKGROUND_LIGHT: [u8; 4] = [245, 245, 245, 255]; // Light grey
pub const BACKGROUND_DARK: [u8; 4] = [255, 255, 255, 255]; // White
pub const AXIS_COLOR: [u8; 4] = [100, 100, 100, 255]; // Dark grey
pub const MAJOR_TICK_COLOR: [u8; 4] = [50, 50, 50, 255]; // Darker grey
pub const MEDIUM_TICK_COLOR: [u8; 4] = [80, 80, 80, 255];
pub const MINOR_TICK_COLOR: [u8; 4] = [120, 120, 120, 255];
pub const ORIGIN_COLOR: [u8; 4] = [255, 0, 0, 255]; // Red

/// Calculate distance to nearest multiple of interval.
/// Returns a value in [0, interval/2].
pub fn distance_to_nearest_multiple(value: f64, interval: f64) -> f64 {
    let remainder = value.rem_euclid(interval);
    remainder.min(interval - remainder)
}

/// Tick spacing parameters for the ruler.
/// All values derived from major_spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct TickParams {
    /// Major tick interval (e.g., 1.0 when viewport width ~4)
    pub major_spacing: f64,
    /// Medium tick interval (major / 2)
    pub medium_spacing: f64,
    /// Minor tick interval (major / 10)
    pub minor_spacing: f64,
    /// Half-width of a major tick line
    pub major_threshold: f64,
    /// Half-width of a medium tick line
    pub medium_threshold: f64,
    /// Half-width of a minor tick line
    pub minor_threshold: f64,
    /// Half-width of the axis lines
    pub axis_threshold: f64,
}

/// Calculate tick parameters from the logical width on screen.
pub fn calculate_tick_params(viewport_width: f64) -> TickParams {
    let log_width = viewport_width.log10();
    let major_exp = (log_width - 0.5).floor() as i32;
    let major_spacing = 10.0_f64.powi(major_exp);

    TickParams {
        major_spacing,
        medium_spacing: major_spacing / 2.0,
        minor_spacing: major_spacing / 10.0,
        major_threshold: major_spacing / 50.0,
        medium_threshold: major_spacing / 75.0,
        minor_threshold: major_spacing / 100.0,
        axis_threshold: major_spacing / 100.0,
    }
}

/// Color of the logical point `(x, y)`.
pub fn ruler_color(x: f64, y: f64, params: &TickParams) -> [u8; 4] {
    let on_x_axis = y.abs() < params.axis_threshold;
    let on_y_axis = x.abs() < params.axis_threshold;
    if on_x_axis && on_y_axis {
        return ORIGIN_COLOR;
    }
    if on_x_axis || on_y_axis {
        return AXIS_COLOR;
    }

    let near = |spacing: f64, threshold: f64| {
        distance_to_nearest_multiple(x, spacing) < threshold
            || distance_to_nearest_multiple(y, spacing) < threshold
    };
    if near(params.major_spacing, params.major_threshold) {
        return MAJOR_TICK_COLOR;
    }
    if near(params.medium_spacing, params.medium_threshold) {
        return MEDIUM_TICK_COLOR;
    }
    if near(params.minor_spacing, params.minor_threshold) {
        return MINOR_TICK_COLOR;
    }

    // Checkerboard of major cells
    let cell_x = (x / params.major_spacing).floor() as i64;
    let cell_y = (y / params.major_spacing).floor() as i64;
    if (cell_x + cell_y).rem_euclid(2) == 0 {
        BACKGROUND_LIGHT
    } else {
        BACKGROUND_DARK
    }
}

/// RGBA buffer (`width * height * 4` bytes) of the ruler for `viewport`.
///
/// Pixels are sampled with the same mapping the drag-to-zoom commit uses.
/// Returns an empty buffer for an undrawable surface.
pub fn ruler_pattern_pixels(viewport: &Viewport, size: SurfaceSize) -> Vec<u8> {
    let Ok(mapper) = CoordinateMapper::new(*viewport, size) else {
        return Vec::new();
    };
    let params = calculate_tick_params(viewport.width().min(viewport.height()));
    let mut data = Vec::with_capacity(size.width as usize * size.height as usize * 4);

    for py in 0..size.height {
        let y = mapper.to_logical_y(py as f64);
        for px in 0..size.width {
            let x = mapper.to_logical_x(px as f64);
            data.extend_from_slice(&ruler_color(x, y, &params));
        }
    }

    data
}
