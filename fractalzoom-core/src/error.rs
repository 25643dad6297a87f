//! Navigation error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Surface has no drawable area ({width}x{height})")]
    InvalidSurface { width: u32, height: u32 },

    #[error("Pointer {event} is not valid while the drag session is {state}")]
    InvalidTransition {
        event: &'static str,
        state: &'static str,
    },

    #[error("Viewport has not been rendered yet")]
    NotInitialized,

    #[error("Render failed: {0}")]
    Render(String),

    #[error("Invalid navigation config: {0}")]
    Config(#[from] serde_json::Error),
}
