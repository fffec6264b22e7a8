use dioxus::prelude::*;

#[component]
pub fn EmptyState(title: String, hint: String) -> Element {
    rsx! {
        div { class: "empty-state",
            h3 { class: "empty-state-title", "{title}" }
            p { class: "text-muted", "{hint}" }
        }
    }
}
