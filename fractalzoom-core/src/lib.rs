pub mod config;
pub mod controller;
pub mod drag_session;
pub mod error;
pub mod render_target;
pub mod resize;
pub mod surface;
pub mod transforms;
pub mod viewport;

pub use config::{NavigationConfig, DEFAULT_BOUNDS, MIN_DRAG_DISTANCE_SQ, RESIZE_DEBOUNCE_MS};
pub use controller::ViewportController;
pub use drag_session::{ActiveDrag, DragOutcome, DragSession};
pub use error::NavigationError;
pub use render_target::RenderTarget;
pub use resize::{on_surface_resized, ResizeReactor};
pub use surface::{SelectionRect, SurfaceSize};
pub use transforms::{fit_bounds_to_surface, CoordinateMapper};
pub use viewport::Viewport;
