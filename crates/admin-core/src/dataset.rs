//! Dashboard dataset: KPI cards, chart series, sales split, locations, tables

use crate::{DonutItem, LocationRevenue, OrderRow, OrderStatus, ProductRow, Series};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure loading a dashboard dataset
#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid dashboard data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("sales item `{label}` has a negative value ({value})")]
    NegativeSales { label: String, value: f64 },
}

/// Direction of a KPI delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    #[default]
    Up,
    Down,
}

impl Trend {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Up => "delta up",
            Self::Down => "delta down",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↗",
            Self::Down => "↘",
        }
    }
}

/// Card background variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Plain,
    Tint,
    Growth,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Plain => "kpi--plain",
            Self::Tint => "kpi--tint",
            Self::Growth => "kpi--growth",
        }
    }
}

/// Headline figure shown on a KPI card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiStat {
    pub title: String,
    pub value: String,
    pub delta: String,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default)]
    pub tone: Tone,
}

impl KpiStat {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        delta: impl Into<String>,
        trend: Trend,
        tone: Tone,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            delta: delta.into(),
            trend,
            tone,
        }
    }
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub kpis: Vec<KpiStat>,
    /// Monthly projections vs actuals (bar chart)
    pub projections: Series,
    /// Current week revenue (primary line)
    pub revenue_current: Series,
    /// Previous week revenue (comparison line)
    pub revenue_previous: Series,
    pub sales: Vec<DonutItem>,
    pub locations: Vec<LocationRevenue>,
    /// Top-selling products table
    #[serde(default)]
    pub products: Vec<ProductRow>,
    /// Order list table
    #[serde(default)]
    pub orders: Vec<OrderRow>,
}

impl DashboardData {
    /// Parse and validate a JSON dataset
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let data: Self = serde_json::from_str(json)?;

        if let Some(item) = data.sales.iter().find(|item| item.value < 0.0) {
            return Err(DataError::NegativeSales {
                label: item.label.clone(),
                value: item.value,
            });
        }

        Ok(data)
    }

    /// Built-in sample dataset
    pub fn sample() -> Self {
        Self {
            kpis: vec![
                KpiStat::new("Customers", "3,781", "+11.01%", Trend::Up, Tone::Tint),
                KpiStat::new("Orders", "1,219", "-0.03%", Trend::Down, Tone::Plain),
                KpiStat::new("Revenue", "$695", "+15.03%", Trend::Up, Tone::Plain),
                KpiStat::new("Growth", "30.1%", "+6.08%", Trend::Up, Tone::Growth),
            ],
            projections: Series(vec![28.0, 22.0, 24.0, 26.0, 23.0, 25.0]),
            revenue_current: Series(vec![12.0, 10.0, 11.0, 14.0, 18.0, 23.0]),
            revenue_previous: Series(vec![8.0, 9.0, 10.0, 11.0, 12.0, 14.0]),
            sales: vec![
                DonutItem::new("Direct", 300.56, "#111111"),
                DonutItem::new("Affiliate", 135.18, "#86EFAC"),
                DonutItem::new("Sponsored", 154.02, "#8B5CF6"),
                DonutItem::new("E-mail", 48.96, "#93C5FD"),
            ],
            locations: vec![
                LocationRevenue::new("New York", 72.0),
                LocationRevenue::new("San Francisco", 39.0),
                LocationRevenue::new("Sydney", 25.0),
                LocationRevenue::new("Singapore", 61.0),
            ],
            products: vec![
                ProductRow::new("ASOS Ridley High Waist", 79.49, 82, 6518.18),
                ProductRow::new("Marco Lightweight Shirt", 128.50, 37, 4754.50),
                ProductRow::new("Half Sleeve Shirt", 39.99, 64, 2559.36),
                ProductRow::new("Lightweight Jacket", 20.00, 184, 3480.00),
                ProductRow::new("Marco Shoes", 79.49, 64, 1965.81),
            ],
            orders: vec![
                OrderRow::new(
                    "#CM9801",
                    "Natali Craig",
                    "Landing Page",
                    "Meadow Lane Oakland",
                    "Just now",
                    OrderStatus::InProgress,
                ),
                OrderRow::new(
                    "#CM9802",
                    "Kate Morrison",
                    "CRM Admin pages",
                    "Larry San Francisco",
                    "A minute ago",
                    OrderStatus::Complete,
                ),
                OrderRow::new(
                    "#CM9803",
                    "Drew Cano",
                    "Client Project",
                    "Bagwell Avenue Ocala",
                    "1 hour ago",
                    OrderStatus::Pending,
                ),
                OrderRow::new(
                    "#CM9804",
                    "Orlando Diggs",
                    "Admin Dashboard",
                    "Washburn Baton Rouge",
                    "Yesterday",
                    OrderStatus::Approved,
                ),
                OrderRow::new(
                    "#CM9805",
                    "Andi Lane",
                    "App Landing Page",
                    "Nest Lane Olivette",
                    "Feb 2, 2023",
                    OrderStatus::Rejected,
                ),
            ],
        }
    }
}

impl Default for DashboardData {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_consistent() {
        let data = DashboardData::sample();
        assert_eq!(data.kpis.len(), 4);
        assert_eq!(data.projections.len(), 6);
        assert_eq!(data.sales[0].label, "Direct");
        assert_eq!(data.products.len(), 5);
        assert_eq!(data.orders[0].status, OrderStatus::InProgress);
    }

    #[test]
    fn test_tables_default_to_empty() {
        let json = r#"{
            "kpis": [],
            "projections": [],
            "revenueCurrent": [],
            "revenuePrevious": [],
            "sales": [],
            "locations": []
        }"#;
        let data = DashboardData::from_json(json).unwrap();
        assert!(data.products.is_empty());
        assert!(data.orders.is_empty());
    }

    #[test]
    fn test_from_json_roundtrips_sample() {
        let json = serde_json::to_string(&DashboardData::sample()).unwrap();
        assert!(json.contains("revenueCurrent"));

        let parsed = DashboardData::from_json(&json).unwrap();
        assert_eq!(parsed, DashboardData::sample());
    }

    #[test]
    fn test_from_json_rejects_negative_series() {
        let json = r#"{
            "kpis": [],
            "projections": [1, -5],
            "revenueCurrent": [],
            "revenuePrevious": [],
            "sales": [],
            "locations": []
        }"#;
        assert!(matches!(
            DashboardData::from_json(json),
            Err(DataError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_negative_sales() {
        let json = r#"{
            "kpis": [],
            "projections": [],
            "revenueCurrent": [],
            "revenuePrevious": [],
            "sales": [{ "label": "Refunds", "value": -3.5, "color": "red" }],
            "locations": []
        }"#;
        match DashboardData::from_json(json) {
            Err(DataError::NegativeSales { label, value }) => {
                assert_eq!(label, "Refunds");
                assert_eq!(value, -3.5);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_kpi_defaults() {
        let json = r#"{ "title": "Orders", "value": "1", "delta": "+1%" }"#;
        let kpi: KpiStat = serde_json::from_str(json).unwrap();
        assert_eq!(kpi.trend, Trend::Up);
        assert_eq!(kpi.tone, Tone::Plain);
    }
}
