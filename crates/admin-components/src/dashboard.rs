//! Main dashboard layout component

use admin_charts::{BarChart, DonutChart, LineChart};
use admin_state::use_app_state;
use leptos::prelude::*;

use crate::{
    KpiGroup, LocationList, OrderTable, ProductTable, RevenueLegend, SalesLegend, ThemeToggle,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();
    let data = state.dashboard;
    let theme = state.theme_signal();

    tracing::debug!(kpis = data.kpis.with_untracked(Vec::len), "mounting dashboard");

    view! {
        <div class="dashboard">
            <header class="dash-header">
                <h2 class="page-title">"eCommerce"</h2>
                <ThemeToggle />
            </header>

            <section class="dashboard-grid">
                <KpiGroup stats=data.kpis start=0 count=2 />

                <section class="card" style="grid-column: 7 / -1; grid-row: 1 / 3; height: 100%">
                    <div class="card-title">"Projections vs Actuals"</div>
                    <BarChart data=data.projections theme=theme />
                </section>

                <KpiGroup stats=data.kpis start=2 count=2 />

                <section class="card" style="grid-column: span 9">
                    <div class="chart-head">
                        <div class="card-title chart-title">"Revenue"</div>
                        <span class="chart-head__divider" aria-hidden="true"></span>
                        <RevenueLegend theme=theme />
                    </div>
                    <LineChart
                        data_a=data.revenue_current
                        data_b=data.revenue_previous
                        theme=theme
                    />
                </section>

                <section class="card loc-card" style="grid-column: span 3">
                    <div class="card-title">"Revenue by Location"</div>
                    <LocationList locations=data.locations />
                </section>

                <section class="card" style="grid-column: span 9">
                    <div class="card-title">"Top Selling Products"</div>
                    <ProductTable products=data.products />
                </section>

                <section class="card donut-card" style="grid-column: span 3">
                    <div class="card-title">"Total Sales"</div>
                    <DonutChart items=data.sales theme=theme />
                    <SalesLegend items=data.sales />
                </section>

                <section class="card" style="grid-column: 1 / -1">
                    <div class="card-title">"Order List"</div>
                    <OrderTable orders=data.orders />
                </section>
            </section>
        </div>
    }
}
