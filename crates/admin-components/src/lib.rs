//! # admin-components
//!
//! Dashboard page and card components built on top of the chart crate.

pub mod dashboard;
pub mod kpi;
pub mod legend;
pub mod location;
pub mod order_table;
pub mod product_table;
pub mod theme_toggle;

pub use dashboard::*;
pub use kpi::*;
pub use legend::*;
pub use location::*;
pub use order_table::*;
pub use product_table::*;
pub use theme_toggle::*;
