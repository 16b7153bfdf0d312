//! Order list rows and their status markers

use serde::{Deserialize, Serialize};

/// Fulfilment state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Paint for the status dot, resolved by the stylesheet's theme variables
    pub fn dot_color(&self) -> &'static str {
        match self {
            Self::InProgress => "var(--primary)",
            Self::Complete => "var(--success)",
            Self::Pending => "var(--accent)",
            Self::Approved => "var(--warning)",
            Self::Rejected => "var(--text-weak)",
        }
    }
}

/// One row of the order list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: String,
    pub user: String,
    pub project: String,
    pub address: String,
    /// Free-form display date ("Just now", "Feb 2, 2023")
    pub date: String,
    pub status: OrderStatus,
}

impl OrderRow {
    pub fn new(
        id: impl Into<String>,
        user: impl Into<String>,
        project: impl Into<String>,
        address: impl Into<String>,
        date: impl Into<String>,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: id.into(),
            user: user.into(),
            project: project.into(),
            address: address.into(),
            date: date.into(),
            status,
        }
    }
}
