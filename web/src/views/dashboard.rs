use crate::{Route, hooks::use_fetched, use_api};
use dioxus::prelude::*;
use types::DashboardStats;
use ui::{LoadingCards, StatCard};

#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let stats = use_fetched("dashboard", move || {
        let api = api.clone();
        async move { api.dashboard_stats().await }
    });

    let state = stats.state.read();
    if state.loading {
        return rsx! { LoadingCards { count: 3 } };
    }
    let DashboardStats {
        users,
        products,
        suppliers,
    } = state.value;

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "Welcome to your admin dashboard." }
                }
            }
            div { class: "stats-grid",
                StatCard { label: "Total Users", value: users.to_string(), accent: "blue" }
                StatCard { label: "Products", value: products.to_string(), accent: "green" }
                StatCard { label: "Suppliers", value: suppliers.to_string(), accent: "purple" }
            }
            div { class: "dashboard-grid",
                Link {
                    to: Route::Products {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Add New Product" }
                    p { class: "dashboard-card-desc", "Browse the inventory and register new products." }
                }
                Link {
                    to: Route::Users {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Manage Users" }
                    p { class: "dashboard-card-desc", "See everyone registered in the backend." }
                }
                Link {
                    to: Route::Analytics {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "View Reports" }
                    p { class: "dashboard-card-desc", "Inventory value, stock levels and categories." }
                }
            }
        }
    }
}
