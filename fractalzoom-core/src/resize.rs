//! Resize handling: re-render the current viewport when the surface changes.

use crate::{NavigationError, RenderTarget, Viewport, ViewportController};

/// Reacts to a single surface-size-changed notification.
pub fn on_surface_resized<T: RenderTarget>(
    controller: &mut ViewportController<T>,
) -> Result<Viewport, NavigationError> {
    controller.handle_resize()
}

/// Coalesces bursts of resize notifications into one re-render.
///
/// Callers `notify` on every resize event and `flush` once things settle
/// (the browser shell flushes from a debounce timer).
#[derive(Clone, Copy, Debug, Default)]
pub struct ResizeReactor {
    pending: u32,
}

impl ResizeReactor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self) {
        self.pending = self.pending.saturating_add(1);
    }

    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    /// Issues one `handle_resize` for all pending notifications.
    ///
    /// Returns `Ok(None)` when nothing was pending. The pending count is
    /// cleared even if the render fails; the next resize event re-arms it.
    pub fn flush<T: RenderTarget>(
        &mut self,
        controller: &mut ViewportController<T>,
    ) -> Result<Option<Viewport>, NavigationError> {
        if self.pending == 0 {
            return Ok(None);
        }
        log::debug!("Flushing {} resize notification(s)", self.pending);
        self.pending = 0;
        on_surface_resized(controller).map(Some)
    }
}
