//! Chart legends for the revenue and total-sales cards

use admin_core::{AmountFormatter, DollarFormatter, DonutItem, Theme};
use leptos::prelude::*;

/// One legend entry: swatch colour, label and formatted amount
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
    pub amount: String,
}

pub fn sales_legend(items: &[DonutItem], formatter: &dyn AmountFormatter) -> Vec<LegendEntry> {
    items
        .iter()
        .map(|item| LegendEntry {
            color: item.color.clone(),
            label: item.label.clone(),
            amount: formatter.format(item.value),
        })
        .collect()
}

/// Legend for the donut card, amounts in dollars
#[component]
pub fn SalesLegend(#[prop(into)] items: Signal<Vec<DonutItem>>) -> impl IntoView {
    let formatter = DollarFormatter::default();

    view! {
        <ul class="sales-legend">
            {move || {
                sales_legend(&items.get(), &formatter)
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class="sales-legend__row">
                                <span class="legend__dot" style=format!("background: {}", entry.color)></span>
                                <span class="sales-legend__label">{entry.label}</span>
                                <span class="sales-legend__amount">{entry.amount}</span>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}

/// Series key for the revenue line chart, coloured from the theme palette
#[component]
pub fn RevenueLegend(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let primary = move || format!("background: {}", theme.get().palette().series_primary);
    let secondary = move || format!("background: {}", theme.get().palette().series_secondary);

    view! {
        <div class="legend">
            <span class="legend__item">
                <span class="legend__dot" style=primary></span>
                <span>"Current Week"</span>
            </span>
            <span class="legend__item">
                <span class="legend__dot" style=secondary></span>
                <span>"Previous Week"</span>
            </span>
        </div>
    }
}
