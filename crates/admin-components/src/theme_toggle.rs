//! Light/dark theme switch

use admin_state::use_app_state;
use leptos::prelude::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_app_state();
    let theme = state.theme;

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            aria-label="Toggle theme"
            on:click=move |_| state.toggle_theme()
        >
            {move || theme.get().icon()}
        </button>
    }
}
