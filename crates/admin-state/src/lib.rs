//! # admin-state
//!
//! Reactive state management for the Admin Dashboard.
//! Uses Leptos signals so each chart re-renders only when its own data changes.

use admin_core::{DashboardData, DonutItem, KpiStat, LocationRevenue, OrderRow, ProductRow, Theme};
use leptos::prelude::*;

// ============================================================================
// DASHBOARD DATA
// ============================================================================

/// Reactive view of the dashboard dataset, one signal per panel
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub kpis: RwSignal<Vec<KpiStat>>,
    pub projections: RwSignal<Vec<f64>>,
    pub revenue_current: RwSignal<Vec<f64>>,
    pub revenue_previous: RwSignal<Vec<f64>>,
    pub sales: RwSignal<Vec<DonutItem>>,
    pub locations: RwSignal<Vec<LocationRevenue>>,
    pub products: RwSignal<Vec<ProductRow>>,
    pub orders: RwSignal<Vec<OrderRow>>,
}

impl DashboardState {
    pub fn new(data: DashboardData) -> Self {
        Self {
            kpis: RwSignal::new(data.kpis),
            projections: RwSignal::new(data.projections.into()),
            revenue_current: RwSignal::new(data.revenue_current.into()),
            revenue_previous: RwSignal::new(data.revenue_previous.into()),
            sales: RwSignal::new(data.sales),
            locations: RwSignal::new(data.locations),
            products: RwSignal::new(data.products),
            orders: RwSignal::new(data.orders),
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dashboard panel data
    pub dashboard: DashboardState,
    /// Current theme, passed explicitly to every chart
    pub theme: RwSignal<Theme>,
}

impl AppState {
    pub fn new(data: DashboardData, theme: Theme) -> Self {
        Self {
            dashboard: DashboardState::new(data),
            theme: RwSignal::new(theme),
        }
    }

    /// Toggle theme
    pub fn toggle_theme(&self) {
        self.theme.update(|theme| *theme = theme.toggle());
        tracing::info!("theme switched to {}", self.theme.get_untracked().attr());
    }

    /// Read-only theme signal for chart props
    pub fn theme_signal(&self) -> Signal<Theme> {
        self.theme.into()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardData::sample(), Theme::default())
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to component tree
pub fn provide_app_state(data: DashboardData, theme: Theme) -> AppState {
    let state = AppState::new(data, theme);
    provide_context(state);
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        let state = AppState::default();
        assert_eq!(state.theme.get_untracked(), Theme::Light);

        state.toggle_theme();
        assert_eq!(state.theme.get_untracked(), Theme::Dark);
        assert_eq!(state.theme_signal().get_untracked(), Theme::Dark);

        state.toggle_theme();
        assert_eq!(state.theme.get_untracked(), Theme::Light);
    }

    #[test]
    fn test_dashboard_state_from_sample() {
        let state = DashboardState::new(DashboardData::sample());
        assert_eq!(
            state.projections.get_untracked(),
            vec![28.0, 22.0, 24.0, 26.0, 23.0, 25.0]
        );
        assert_eq!(state.sales.get_untracked().len(), 4);
        assert_eq!(state.products.get_untracked().len(), 5);
        assert_eq!(state.orders.get_untracked().len(), 5);
    }
}
