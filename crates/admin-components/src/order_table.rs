//! Order list with status dots

use admin_core::OrderRow;
use leptos::prelude::*;

#[component]
pub fn OrderTable(#[prop(into)] orders: Signal<Vec<OrderRow>>) -> impl IntoView {
    view! {
        <div style="overflow: auto">
            <table class="table orders-table" role="table">
                <thead>
                    <tr>
                        <th>"Order ID"</th>
                        <th>"User"</th>
                        <th>"Project"</th>
                        <th>"Address"</th>
                        <th>"Date"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        orders
                            .get()
                            .into_iter()
                            .map(|order| {
                                let dot = format!("background: {}", order.status.dot_color());
                                let status = order.status.label();
                                view! {
                                    <tr>
                                        <td>{order.id}</td>
                                        <td>{order.user}</td>
                                        <td>{order.project}</td>
                                        <td>{order.address}</td>
                                        <td>{order.date}</td>
                                        <td>
                                            <span class="status">
                                                <span class="status__dot" style=dot></span>
                                                {status}
                                            </span>
                                        </td>
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
