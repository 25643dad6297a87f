//! Navigation configuration.
//!
//! Defaults reproduce the classic Mandelbrot overview and the tap-vs-drag
//! threshold. Any field can be overridden from JSON; omitted fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::{NavigationError, Viewport};

/// Logical rectangle shown before any interaction.
pub const DEFAULT_BOUNDS: Viewport = Viewport {
    x1: -2.0,
    y1: -1.5,
    x2: 1.0,
    y2: 1.5,
};

/// Minimum squared drag diagonal (px²) for a drag to count as a zoom.
/// 500 px² is roughly a 22.4 px diagonal.
pub const MIN_DRAG_DISTANCE_SQ: f64 = 500.0;

/// Quiet period before a burst of resize notifications is flushed.
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Bounds rendered on start-up and by the home action
    pub default_bounds: Viewport,
    /// Drags whose squared diagonal is below this are discarded
    pub min_drag_distance_sq: f64,
    /// Debounce delay applied by the browser shell to resize events
    pub resize_debounce_ms: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_bounds: DEFAULT_BOUNDS,
            min_drag_distance_sq: MIN_DRAG_DISTANCE_SQ,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

impl NavigationConfig {
    pub fn from_json(json: &str) -> Result<Self, NavigationError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_literal_defaults() {
        let config = NavigationConfig::default();
        assert_eq!(config.default_bounds, Viewport::new(-2.0, -1.5, 1.0, 1.5));
        assert_eq!(config.min_drag_distance_sq, 500.0);
        assert_eq!(config.resize_debounce_ms, 100);
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let config = NavigationConfig::from_json(r#"{"min_drag_distance_sq": 100.0}"#).unwrap();
        assert_eq!(config.min_drag_distance_sq, 100.0);
        assert_eq!(config.default_bounds, DEFAULT_BOUNDS);
        assert_eq!(config.resize_debounce_ms, RESIZE_DEBOUNCE_MS);
    }

    #[test]
    fn json_can_replace_default_bounds() {
        let config = NavigationConfig::from_json(
            r#"{"default_bounds": {"x1": -1.0, "y1": -1.0, "x2": 1.0, "y2": 1.0}}"#,
        )
        .unwrap();
        assert_eq!(config.default_bounds, Viewport::new(-1.0, -1.0, 1.0, 1.0));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = NavigationConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, NavigationError::Config(_)));
    }
}
