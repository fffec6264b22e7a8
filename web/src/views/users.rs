use crate::{hooks::use_fetched, use_api};
use dioxus::prelude::*;
use types::search::display_key;
use ui::{EmptyState, LoadingRows};

#[component]
pub fn Users() -> Element {
    let api = use_api();
    let users = use_fetched("users", move || {
        let users = api.users();
        async move { users.get_all().await }
    });

    let state = users.state.read();
    if state.loading {
        return rsx! { LoadingRows { count: 5 } };
    }
    let count = state.value.len();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Users" }
                    p { class: "page-subtitle", "{count} registered users." }
                }
            }
            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                            }
                        }
                        tbody {
                            for (index, user) in state.value.iter().enumerate() {
                                tr { key: "{display_key(user.id.as_deref(), index)}",
                                    td { "{user.name()}" }
                                    td { {user.email().unwrap_or("—")} }
                                }
                            }
                        }
                    }
                }
                if state.value.is_empty() {
                    EmptyState {
                        title: "No users found",
                        hint: "Users registered in the backend will show up here.",
                    }
                }
            }
        }
    }
}
