//! Admin Dashboard - WASM entry point

use admin_components::Dashboard;
use admin_core::{DashboardData, Theme};
use admin_state::provide_app_state;
use leptos::prelude::*;

const DATASET: &str = include_str!("../assets/dashboard.json");

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount::mount_to_body(App);
}

/// Embedded dataset, or the built-in sample if it fails validation
fn load_dataset() -> DashboardData {
    match DashboardData::from_json(DATASET) {
        Ok(data) => data,
        Err(err) => {
            tracing::error!("failed to load dashboard dataset: {err}");
            DashboardData::sample()
        }
    }
}

/// Mirror the theme onto `<html data-theme>` so the stylesheet follows it
fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        tracing::warn!("no document element to apply theme to");
        return;
    };

    if let Err(err) = root.set_attribute("data-theme", theme.attr()) {
        tracing::warn!("failed to set data-theme: {err:?}");
    }
}

#[component]
fn App() -> impl IntoView {
    let data = load_dataset();
    tracing::info!(
        kpis = data.kpis.len(),
        sales = data.sales.len(),
        "admin dashboard starting"
    );

    let state = provide_app_state(data, Theme::default());
    Effect::new(move |_| apply_theme(state.theme.get()));

    view! { <Dashboard /> }
}
