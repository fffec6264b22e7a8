use dioxus::prelude::*;

#[component]
pub fn SearchInput(mut query: Signal<String>, placeholder: String) -> Element {
    rsx! {
        div { class: "search",
            input {
                class: "form-input search-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
        }
    }
}
