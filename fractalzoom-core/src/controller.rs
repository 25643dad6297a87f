use crate::drag_session::{DragOutcome, DragSession};
use crate::surface::SelectionRect;
use crate::transforms::CoordinateMapper;
use crate::{NavigationConfig, NavigationError, RenderTarget, Viewport};

/// Owns the current viewport and drives drag-to-zoom navigation.
///
/// All state lives here: the viewport last reported by the render target and
/// the pointer drag in progress. Every successful operation issues exactly
/// one render call and replaces the viewport with the adjusted bounds; a
/// failed render leaves everything as it was.
pub struct ViewportController<T: RenderTarget> {
    target: T,
    config: NavigationConfig,
    viewport: Option<Viewport>,
    drag: DragSession,
}

impl<T: RenderTarget> ViewportController<T> {
    pub fn new(target: T, config: NavigationConfig) -> Self {
        Self {
            target,
            config,
            viewport: None,
            drag: DragSession::Idle,
        }
    }

    /// Viewport currently on screen, `None` until the first render succeeds
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    pub fn selection(&self) -> Option<&SelectionRect> {
        self.drag.selection()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Renders `initial_bounds`. The only operation that may run before a
    /// viewport exists.
    pub fn initialize(&mut self, initial_bounds: Viewport) -> Result<Viewport, NavigationError> {
        self.render(initial_bounds)
    }

    pub fn initialize_default(&mut self) -> Result<Viewport, NavigationError> {
        self.initialize(self.config.default_bounds)
    }

    /// Goes back to the configured default bounds.
    pub fn reset_view(&mut self) -> Result<Viewport, NavigationError> {
        self.render(self.config.default_bounds)
    }

    pub fn handle_pointer_down(&mut self, x: f64, y: f64) {
        if let Err(e) = self.drag.pointer_down(x, y) {
            log::debug!("Dropped pointer event: {e}");
        }
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        if let Err(e) = self.drag.pointer_move(x, y) {
            log::debug!("Dropped pointer event: {e}");
        }
    }

    /// Ends the drag. Returns the new viewport when the selection was large
    /// enough to zoom, `None` when it was discarded.
    ///
    /// The selection is the one the last pointer move produced; the release
    /// position does not reshape it.
    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> Result<Option<Viewport>, NavigationError> {
        log::debug!("Pointer released at ({x}, {y})");
        let outcome = match self.drag.pointer_up(self.config.min_drag_distance_sq) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::debug!("Dropped pointer event: {e}");
                return Ok(None);
            }
        };

        match outcome {
            DragOutcome::Discarded => {
                log::debug!("Drag below threshold, discarded");
                Ok(None)
            }
            DragOutcome::Zoom(rect) => self.zoom_to_selection(&rect).map(Some),
        }
    }

    /// Drops an active drag without zooming, e.g. when the browser cancels
    /// the pointer. A no-op while idle.
    pub fn handle_pointer_cancel(&mut self) {
        if self.drag.cancel() {
            log::debug!("Drag cancelled");
        }
    }

    /// Re-renders the current logical bounds at the new surface size.
    pub fn handle_resize(&mut self) -> Result<Viewport, NavigationError> {
        let current = self.viewport.ok_or(NavigationError::NotInitialized)?;
        self.render(current)
    }

    fn zoom_to_selection(&mut self, rect: &SelectionRect) -> Result<Viewport, NavigationError> {
        let current = self.viewport.ok_or(NavigationError::NotInitialized)?;
        let mapper = CoordinateMapper::new(current, self.target.surface_size())?;
        let requested = mapper.map_selection(rect);
        log::debug!("Zoom selection {rect:?} -> {requested:?}");
        self.render(requested)
    }

    fn render(&mut self, requested: Viewport) -> Result<Viewport, NavigationError> {
        let size = self.target.surface_size().validate()?;
        let adjusted = self.target.render(size, &requested)?;
        log::debug!(
            "Rendered {}x{}: requested {requested:?}, adjusted {adjusted:?}",
            size.width,
            size.height
        );
        self.viewport = Some(adjusted);
        Ok(adjusted)
    }
}
