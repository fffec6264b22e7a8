use crate::{hooks::use_fetched, use_api};
use dioxus::prelude::*;
use types::{InventoryAnalytics, format};
use ui::{EmptyState, LoadingCards, StatCard};

#[component]
pub fn Analytics() -> Element {
    let api = use_api();
    let products = use_fetched("analytics", move || {
        let products = api.products();
        async move { products.get_all().await }
    });
    // Recomputed only when the product list changes.
    let analytics = use_memo(move || InventoryAnalytics::from_products(&products.state.read().value));

    if products.state.read().loading {
        return rsx! { LoadingCards { count: 4 } };
    }
    let analytics = analytics.read();
    let breakdown = &analytics.category_breakdown;

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Analytics" }
                    p { class: "page-subtitle", "Insights into your inventory." }
                }
            }
            div { class: "stats-grid",
                StatCard {
                    label: "Total Inventory Value",
                    value: format::currency(analytics.total_value),
                    accent: "green",
                }
                StatCard {
                    label: "Average Product Price",
                    value: format::currency(analytics.average_price),
                    accent: "blue",
                }
                StatCard {
                    label: "Total Stock Units",
                    value: format::grouped(analytics.total_stock),
                    accent: "purple",
                }
                StatCard {
                    label: "Low Stock Items",
                    value: analytics.low_stock_items.to_string(),
                    accent: "red",
                }
            }
            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Category Breakdown" }
                }
                div { class: "card-body",
                    if breakdown.is_empty() {
                        EmptyState {
                            title: "No categories yet",
                            hint: "Categories appear once products are added.",
                        }
                    }
                    ul { class: "category-list",
                        for (category, count) in breakdown.iter() {
                            {
                                let percentage = format!("{:.1}", breakdown.percentage(count));
                                rsx! {
                                    li { key: "{category}", class: "category-item",
                                        span { class: "category-name", "{category}" }
                                        span { class: "text-muted", "{count} items ({percentage}%)" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
