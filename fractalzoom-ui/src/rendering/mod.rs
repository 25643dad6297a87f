mod canvas_target;
mod canvas_utils;
mod test_pattern;

pub use canvas_target::CanvasTarget;
