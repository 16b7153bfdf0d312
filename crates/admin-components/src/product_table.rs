//! Top-selling products table

use admin_core::{AmountFormatter, DollarFormatter, ProductRow};
use leptos::prelude::*;

/// Display strings for one product row: name, price, quantity, amount
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCells {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub amount: String,
}

pub fn product_cells(row: &ProductRow, formatter: &dyn AmountFormatter) -> ProductCells {
    ProductCells {
        name: row.name.clone(),
        price: formatter.format(row.price),
        quantity: row.quantity.to_string(),
        amount: formatter.format(row.amount),
    }
}

#[component]
pub fn ProductTable(#[prop(into)] products: Signal<Vec<ProductRow>>) -> impl IntoView {
    let formatter = DollarFormatter::default();

    view! {
        <div style="overflow: auto">
            <table class="table products-table" role="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Price"</th>
                        <th>"Quantity"</th>
                        <th>"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        products
                            .get()
                            .iter()
                            .map(|row| {
                                let cells = product_cells(row, &formatter);
                                view! {
                                    <tr>
                                        <td>{cells.name}</td>
                                        <td>{cells.price}</td>
                                        <td>{cells.quantity}</td>
                                        <td>{cells.amount}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_cells_format_dollars() {
        let row = ProductRow::new("ASOS Ridley High Waist", 79.49, 82, 6518.18);
        let cells = product_cells(&row, &DollarFormatter::default());

        assert_eq!(cells.name, "ASOS Ridley High Waist");
        assert_eq!(cells.price, "$79.49");
        assert_eq!(cells.quantity, "82");
        assert_eq!(cells.amount, "$6,518.18");
    }

    #[test]
    fn test_product_cells_pad_whole_prices() {
        let row = ProductRow::new("Lightweight Jacket", 20.0, 184, 3480.0);
        let cells = product_cells(&row, &DollarFormatter::default());

        assert_eq!(cells.price, "$20.00");
        assert_eq!(cells.amount, "$3,480.00");
    }
}
