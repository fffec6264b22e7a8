use dioxus::prelude::*;

/// Pulsing placeholders for a grid of stat cards.
#[component]
pub fn LoadingCards(count: usize) -> Element {
    rsx! {
        div { class: "stats-grid",
            for i in 0..count {
                div { key: "{i}", class: "card stat-card skeleton",
                    div { class: "skeleton-line skeleton-line-short" }
                    div { class: "skeleton-line skeleton-line-tall" }
                }
            }
        }
    }
}

/// Pulsing placeholders for a table.
#[component]
pub fn LoadingRows(count: usize) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-body",
                for i in 0..count {
                    div { key: "{i}", class: "skeleton skeleton-row" }
                }
            }
        }
    }
}
