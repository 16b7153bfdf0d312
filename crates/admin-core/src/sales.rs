//! Sales split items (donut input), top-selling products and location revenue rows

use serde::{Deserialize, Serialize};

/// One labelled, coloured slice of a total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutItem {
    pub label: String,
    pub value: f64,
    /// Any SVG paint value (hex, rgb(), var(...))
    pub color: String,
}

impl DonutItem {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Sum of all item values
pub fn sales_total(items: &[DonutItem]) -> f64 {
    items.iter().map(|item| item.value).sum()
}

/// One row of the top-selling products table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub name: String,
    /// Unit price in dollars
    pub price: f64,
    pub quantity: u32,
    /// Revenue booked for the product, in dollars
    pub amount: f64,
}

impl ProductRow {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32, amount: f64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            amount,
        }
    }
}

/// Revenue attributed to a city (values in thousands)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRevenue {
    pub name: String,
    pub value: f64,
}

impl LocationRevenue {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Display value, e.g. "72K"
    pub fn label(&self) -> String {
        format!("{}K", self.value.round())
    }
}

/// Progress-bar percentage of each location relative to the largest one
pub fn location_shares(locations: &[LocationRevenue]) -> Vec<f64> {
    let max = locations.iter().map(|l| l.value).fold(0.0_f64, f64::max);

    locations
        .iter()
        .map(|l| if max <= 0.0 { 0.0 } else { l.value / max * 100.0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations() -> Vec<LocationRevenue> {
        vec![
            LocationRevenue::new("New York", 72.0),
            LocationRevenue::new("San Francisco", 39.0),
            LocationRevenue::new("Sydney", 25.0),
            LocationRevenue::new("Singapore", 61.0),
        ]
    }

    #[test]
    fn test_location_shares_relative_to_max() {
        let shares = location_shares(&locations());
        assert_eq!(shares[0], 100.0);
        assert!((shares[1] - 39.0 / 72.0 * 100.0).abs() < 1e-9);
        assert!(shares.iter().all(|&s| s <= 100.0));
    }

    #[test]
    fn test_location_shares_all_zero() {
        let zeros = vec![LocationRevenue::new("Nowhere", 0.0)];
        assert_eq!(location_shares(&zeros), vec![0.0]);
        assert!(location_shares(&[]).is_empty());
    }

    #[test]
    fn test_location_label() {
        assert_eq!(locations()[0].label(), "72K");
    }

    #[test]
    fn test_sales_total() {
        let items = vec![
            DonutItem::new("Direct", 300.56, "#111111"),
            DonutItem::new("Affiliate", 135.18, "#86EFAC"),
        ];
        assert!((sales_total(&items) - 435.74).abs() < 1e-9);
        assert_eq!(sales_total(&[]), 0.0);
    }
}
