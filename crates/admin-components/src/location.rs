//! Revenue-by-location list with relative progress bars

use admin_core::{LocationRevenue, location_shares};
use leptos::prelude::*;

/// One rendered row of the location list
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRow {
    pub name: String,
    pub label: String,
    /// Width of the progress fill, relative to the largest location
    pub percent: f64,
}

pub fn location_rows(locations: &[LocationRevenue]) -> Vec<LocationRow> {
    locations
        .iter()
        .zip(location_shares(locations))
        .map(|(location, percent)| LocationRow {
            name: location.name.clone(),
            label: location.label(),
            percent,
        })
        .collect()
}

#[component]
pub fn LocationList(#[prop(into)] locations: Signal<Vec<LocationRevenue>>) -> impl IntoView {
    view! {
        <div class="loc-list">
            {move || {
                location_rows(&locations.get())
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="loc-row">
                                <span class="loc-name">{row.name}</span>
                                <span class="loc-val">{row.label}</span>
                                <div class="loc-progress">
                                    <span style=format!("width: {}%", row.percent)></span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_scale_against_largest() {
        let rows = location_rows(&[
            LocationRevenue::new("New York", 72.0),
            LocationRevenue::new("San Francisco", 39.0),
            LocationRevenue::new("Sydney", 25.0),
            LocationRevenue::new("Singapore", 61.0),
        ]);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].label, "72K");
        assert_eq!(rows[0].percent, 100.0);
        assert!((rows[2].percent - 25.0 / 72.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rows_empty() {
        assert!(location_rows(&[]).is_empty());
    }
}
