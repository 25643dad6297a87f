//! Pointer drag state machine for drag-to-zoom selection.
//!
//! ```text
//! Idle   --down(x,y)--> Active { start = (x,y), rect = (x,y,0,0) }
//! Active --move(x,y)--> Active { rect spanning start and (x,y) }
//! Active --up--------> Idle, emitting Zoom(rect) or Discarded
//! Active --cancel----> Idle, emitting Discarded
//! ```
//!
//! Only moves shape the selection; the release decides on the rectangle
//! the last move left behind.
//!
//! Any other event is rejected with `InvalidTransition` and leaves the
//! session untouched, so at most one drag can ever be active.

use crate::surface::SelectionRect;
use crate::NavigationError;

/// Result of releasing the pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    /// Selection was large enough; zoom into it
    Zoom(SelectionRect),
    /// Selection was below the distance threshold (a tap or a jitter)
    Discarded,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveDrag {
    pub start_x: f64,
    pub start_y: f64,
    pub selection: SelectionRect,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    Active(ActiveDrag),
}

impl DragSession {
    pub fn is_active(&self) -> bool {
        matches!(self, DragSession::Active(_))
    }

    /// Current selection while a drag is in progress
    pub fn selection(&self) -> Option<&SelectionRect> {
        match self {
            DragSession::Idle => None,
            DragSession::Active(drag) => Some(&drag.selection),
        }
    }

    fn state_name(&self) -> &'static str {
        match self {
            DragSession::Idle => "idle",
            DragSession::Active(_) => "active",
        }
    }

    fn reject(&self, event: &'static str) -> NavigationError {
        NavigationError::InvalidTransition {
            event,
            state: self.state_name(),
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> Result<(), NavigationError> {
        if self.is_active() {
            return Err(self.reject("down"));
        }
        *self = DragSession::Active(ActiveDrag {
            start_x: x,
            start_y: y,
            selection: SelectionRect {
                left: x,
                top: y,
                width: 0.0,
                height: 0.0,
            },
        });
        Ok(())
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<SelectionRect, NavigationError> {
        match self {
            DragSession::Active(drag) => {
                drag.selection = SelectionRect::spanning((drag.start_x, drag.start_y), (x, y));
                Ok(drag.selection)
            }
            DragSession::Idle => Err(self.reject("move")),
        }
    }

    /// Ends the drag, deciding on the stored selection. The session is back
    /// to `Idle` whatever the outcome.
    pub fn pointer_up(&mut self, min_distance_sq: f64) -> Result<DragOutcome, NavigationError> {
        let DragSession::Active(drag) = *self else {
            return Err(self.reject("up"));
        };
        *self = DragSession::Idle;

        if drag.selection.diagonal_sq() >= min_distance_sq {
            Ok(DragOutcome::Zoom(drag.selection))
        } else {
            Ok(DragOutcome::Discarded)
        }
    }

    /// Abandons an active drag (the platform took the pointer away).
    /// Returns false when there was nothing to cancel.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        *self = DragSession::Idle;
        was_active
    }
}
