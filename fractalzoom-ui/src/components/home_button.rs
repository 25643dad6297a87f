use leptos::*;

/// Round icon button that sends the view back to the default bounds.
#[component]
pub fn HomeButton(on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            style="display: flex; color: white; background: transparent; border: none; border-radius: 9999px; padding: 6px; cursor: pointer;"
            on:click=move |_| on_click.call(())
            title="Back to the full view"
            aria-label="Back to the full view"
        >
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>
                <polyline points="9 22 9 12 15 12 15 22"/>
            </svg>
        </button>
    }
}
