use fractalzoom_core::Viewport;
use leptos::*;

use crate::components::{HomeButton, ZoomCanvas};

/// Human-readable logical bounds for the status bar.
pub fn format_bounds(viewport: &Viewport) -> String {
    format!(
        "x: [{:.6}, {:.6}]  y: [{:.6}, {:.6}]",
        viewport.x1, viewport.x2, viewport.y1, viewport.y2
    )
}

#[component]
pub fn App() -> impl IntoView {
    let (viewport, set_viewport) = create_signal::<Option<Viewport>>(None);
    let home = create_trigger();

    let on_viewport_change = Callback::new(move |vp: Viewport| {
        log::info!("Viewport changed: {}", format_bounds(&vp));
        set_viewport.set(Some(vp));
    });

    let bounds_label = move || viewport.get().map(|vp| format_bounds(&vp)).unwrap_or_default();

    view! {
        <div style="position: relative; width: 100vw; height: 100vh; overflow: hidden; background: #1a1a1a;">
            <ZoomCanvas on_viewport_change=on_viewport_change reset=home />
            <div style="position: absolute; left: 12px; bottom: 12px; display: flex; align-items: center; gap: 8px; padding: 4px 12px; border-radius: 8px; background: rgba(0, 0, 0, 0.6); color: white; font-family: monospace;">
                <HomeButton on_click=Callback::new(move |_| home.notify()) />
                <span>{bounds_label}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bounds_lists_x_then_y_range() {
        let label = format_bounds(&Viewport::new(-0.5, 0.0, -0.3125, 0.25));
        assert_eq!(
            label,
            "x: [-0.500000, -0.312500]  y: [0.000000, 0.250000]"
        );
    }
}
