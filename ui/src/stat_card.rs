use dioxus::prelude::*;

/// A single headline number with its label.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    accent: Option<&'static str>,
) -> Element {
    let class = match accent {
        Some(accent) => format!("card stat-card stat-card-{accent}"),
        None => "card stat-card".to_string(),
    };

    rsx! {
        div { class,
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}
