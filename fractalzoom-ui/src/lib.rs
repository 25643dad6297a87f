// ABOUTME: Browser shell for the drag-to-zoom viewport navigator
// ABOUTME: Mounts the App component and wires logging and panic reporting

mod app;
pub mod components;
pub mod hooks;
pub mod rendering;

use leptos::*;
use wasm_bindgen::prelude::*;

pub use app::{format_bounds, App};

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(App);
}
