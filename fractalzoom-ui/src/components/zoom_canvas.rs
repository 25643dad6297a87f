// fractalzoom-ui/src/components/zoom_canvas.rs
use fractalzoom_core::{
    NavigationConfig, NavigationError, ResizeReactor, SelectionRect, Viewport, ViewportController,
};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, PointerEvent};

use crate::hooks::use_debounced_resize;
use crate::rendering::CanvasTarget;

type Controller = ViewportController<CanvasTarget>;

/// Inline style for the rubber-band rectangle shown while dragging.
pub fn selection_style(selection: Option<SelectionRect>) -> String {
    match selection {
        Some(rect) => format!(
            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; \
             border: 1px dashed white; background: rgba(255, 255, 255, 0.15); pointer-events: none;",
            rect.left, rect.top, rect.width, rect.height
        ),
        None => "display: none;".to_string(),
    }
}

#[component]
pub fn ZoomCanvas(
    /// Callback fired whenever a render produced a new viewport
    on_viewport_change: Callback<Viewport>,
    /// Navigation settings; defaults when omitted
    #[prop(optional)]
    config: Option<NavigationConfig>,
    /// Notify to go back to the default bounds
    #[prop(optional)]
    reset: Option<Trigger>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();

    // Created once the canvas is mounted; only touched from event handlers
    let controller = store_value::<Option<Controller>>(None);
    let reactor = store_value(ResizeReactor::new());
    let selection = create_rw_signal::<Option<SelectionRect>>(None);

    let report = move |result: Result<Option<Viewport>, NavigationError>| match result {
        Ok(Some(viewport)) => on_viewport_change.call(viewport),
        Ok(None) => {}
        Err(e) => log::warn!("Viewport render failed: {e}"),
    };

    let window_size = use_debounced_resize(
        config.resize_debounce_ms,
        move || reactor.update_value(|r| r.notify()),
        move || {
            controller.update_value(|slot| {
                if let Some(ctrl) = slot.as_mut() {
                    reactor.update_value(|r| report(r.flush(ctrl)));
                }
            });
        },
    );

    // First render, retried on resize until the canvas has a drawable size
    create_effect(move |_| {
        let (width, height) = window_size.get();
        let Some(canvas_el) = canvas_ref.get() else {
            return;
        };
        if width == 0 || height == 0 {
            return;
        }

        controller.update_value(|slot| {
            let ctrl = slot.get_or_insert_with(|| {
                let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>().clone();
                ViewportController::new(CanvasTarget::new(canvas), config)
            });
            if ctrl.viewport().is_none() {
                report(ctrl.initialize_default().map(Some));
            }
        });
    });

    if let Some(reset) = reset {
        create_effect(move |prev: Option<()>| {
            reset.track();
            if prev.is_none() {
                return;
            }
            controller.update_value(|slot| {
                if let Some(ctrl) = slot.as_mut() {
                    report(ctrl.reset_view().map(Some));
                }
            });
        });
    }

    // Pointer position relative to the canvas's top-left corner
    let surface_position = move |ev: &PointerEvent| -> (f64, f64) {
        match canvas_ref.get_untracked() {
            Some(canvas) => {
                let bounds = canvas.get_bounding_client_rect();
                (
                    ev.client_x() as f64 - bounds.left(),
                    ev.client_y() as f64 - bounds.top(),
                )
            }
            None => (ev.offset_x() as f64, ev.offset_y() as f64),
        }
    };

    let on_pointer_down = move |ev: PointerEvent| {
        ev.prevent_default();
        let (x, y) = surface_position(&ev);

        let mut current = None;
        controller.update_value(|slot| {
            if let Some(ctrl) = slot.as_mut() {
                ctrl.handle_pointer_down(x, y);
                current = ctrl.selection().copied();
            }
        });

        if current.is_some() {
            if let Some(canvas) = canvas_ref.get_untracked() {
                let _ = canvas.set_pointer_capture(ev.pointer_id());
            }
        }
        selection.set(current);
    };

    let on_pointer_move = move |ev: PointerEvent| {
        if selection.get_untracked().is_none() {
            return;
        }
        let (x, y) = surface_position(&ev);

        let mut current = None;
        controller.update_value(|slot| {
            if let Some(ctrl) = slot.as_mut() {
                ctrl.handle_pointer_move(x, y);
                current = ctrl.selection().copied();
            }
        });
        selection.set(current);
    };

    let on_pointer_up = move |ev: PointerEvent| {
        let (x, y) = surface_position(&ev);

        let mut result = Ok(None);
        controller.update_value(|slot| {
            if let Some(ctrl) = slot.as_mut() {
                result = ctrl.handle_pointer_up(x, y);
            }
        });

        if let Some(canvas) = canvas_ref.get_untracked() {
            let _ = canvas.release_pointer_capture(ev.pointer_id());
        }
        selection.set(None);
        report(result);
    };

    // The browser took the pointer away (touch scroll, focus loss): drop the
    // drag without zooming
    let on_pointer_cancel = move |ev: PointerEvent| {
        controller.update_value(|slot| {
            if let Some(ctrl) = slot.as_mut() {
                ctrl.handle_pointer_cancel();
            }
        });

        if let Some(canvas) = canvas_ref.get_untracked() {
            let _ = canvas.release_pointer_capture(ev.pointer_id());
        }
        selection.set(None);
    };

    view! {
        <div style="position: relative; width: 100%; height: 100%;">
            <canvas
                node_ref=canvas_ref
                style="display: block; width: 100%; height: 100%; touch-action: none; cursor: crosshair;"
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
            />
            <div style=move || selection_style(selection.get()) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_style_hidden_when_idle() {
        assert_eq!(selection_style(None), "display: none;");
    }

    #[test]
    fn selection_style_positions_rectangle() {
        let style = selection_style(Some(SelectionRect {
            left: 400.0,
            top: 300.0,
            width: 50.0,
            height: 25.5,
        }));

        assert!(style.contains("left: 400px;"));
        assert!(style.contains("top: 300px;"));
        assert!(style.contains("width: 50px;"));
        assert!(style.contains("height: 25.5px;"));
    }
}
