//! KPI stat cards

use admin_core::KpiStat;
use leptos::prelude::*;

/// Full class list for a card, e.g. "card kpi kpi--tint"
pub fn kpi_card_class(stat: &KpiStat) -> String {
    format!("card kpi {}", stat.tone.css_class())
}

#[component]
pub fn KpiCard(stat: KpiStat) -> impl IntoView {
    let class = kpi_card_class(&stat);
    let delta_class = stat.trend.css_class();
    let arrow = stat.trend.arrow();

    view! {
        <section class=class>
            <div class="kpi__title">{stat.title}</div>
            <div class="kpi__row">
                <div class="kpi__value">{stat.value}</div>
                <div class=delta_class>
                    {stat.delta} " " <span class="delta__arrow">{arrow}</span>
                </div>
            </div>
        </section>
    }
}

/// Cards for a slice of the KPI list
#[component]
pub fn KpiGroup(#[prop(into)] stats: Signal<Vec<KpiStat>>, start: usize, count: usize) -> impl IntoView {
    move || {
        stats
            .get()
            .into_iter()
            .skip(start)
            .take(count)
            .map(|stat| view! { <KpiCard stat=stat /> })
            .collect_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_core::{Tone, Trend};

    #[test]
    fn test_card_class_follows_tone() {
        let stat = KpiStat::new("Growth", "30.1%", "+6.08%", Trend::Up, Tone::Growth);
        assert_eq!(kpi_card_class(&stat), "card kpi kpi--growth");

        let plain = KpiStat::new("Orders", "1,219", "-0.03%", Trend::Down, Tone::Plain);
        assert_eq!(kpi_card_class(&plain), "card kpi kpi--plain");
    }
}
