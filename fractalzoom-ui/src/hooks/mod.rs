mod use_debounced_resize;

pub use use_debounced_resize::use_debounced_resize;
