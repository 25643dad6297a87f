mod home_button;
mod zoom_canvas;

pub use home_button::HomeButton;
pub use zoom_canvas::ZoomCanvas;
