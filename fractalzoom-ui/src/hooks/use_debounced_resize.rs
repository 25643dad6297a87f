use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_use::use_window_size;

/// Reactive window size with a debounced "resize settled" notification.
///
/// `on_resize` runs on every size change after the first, `on_settled` once
/// no further change has arrived for `delay_ms`. The initial size is not
/// reported as a resize.
pub fn use_debounced_resize<R, S>(delay_ms: u32, on_resize: R, on_settled: S) -> Signal<(u32, u32)>
where
    R: Fn() + 'static,
    S: Fn() + 'static,
{
    let window_size = use_window_size();
    let size = Signal::derive(move || {
        (
            window_size.width.get().max(0.0) as u32,
            window_size.height.get().max(0.0) as u32,
        )
    });

    let pending = store_value::<Option<Timeout>>(None);
    let on_settled = Rc::new(on_settled);

    create_effect(move |prev: Option<(u32, u32)>| {
        let current = size.get();

        if prev.is_some_and(|prev| prev != current) {
            on_resize();
            let on_settled = Rc::clone(&on_settled);
            // Dropping the previous Timeout cancels it
            pending.set_value(Some(Timeout::new(delay_ms, move || on_settled())));
        }

        current
    });

    size
}
