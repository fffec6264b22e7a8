use crate::{hooks::use_fetched, use_api};
use dioxus::prelude::*;
use types::{
    SupplierDraft,
    search::{self, display_key},
};
use ui::{EmptyState, LoadingRows, Modal, SearchInput};

#[component]
pub fn Suppliers() -> Element {
    let api = use_api();
    let suppliers = use_fetched("suppliers", {
        let api = api.clone();
        move || {
            let suppliers = api.suppliers();
            async move { suppliers.get_all().await }
        }
    });
    let search = use_signal(String::new);
    let mut show_create_form = use_signal(|| false);
    let mut draft = use_signal(SupplierDraft::default);
    let mut creating = use_signal(|| false);

    // Runs in this view's scope, so closing the modal cannot drop it midway.
    let submit = move |()| {
        let client = api.suppliers();
        let submitted = draft.read().clone();
        spawn(async move {
            creating.set(true);
            match client.create_from_draft(&submitted).await {
                Ok(created) => {
                    draft.set(SupplierDraft::default());
                    show_create_form.set(false);
                    suppliers.settle(created.reload);
                }
                Err(error) => tracing::error!(%error, "failed to create supplier"),
            }
            creating.set(false);
        });
    };

    let state = suppliers.state.read();
    if state.loading {
        return rsx! { LoadingRows { count: 5 } };
    }
    let query = search.read();
    let filtered = search::filter(&state.value, &query);
    let empty_hint = if query.is_empty() {
        "Get started by adding a new supplier."
    } else {
        "Try adjusting your search terms."
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Suppliers" }
                    p { class: "page-subtitle", "Manage your supplier relationships." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create_form.set(true),
                        "Add Supplier"
                    }
                }
            }

            if *show_create_form.read() {
                CreateSupplierModal {
                    draft,
                    creating: creating(),
                    on_close: move |_| show_create_form.set(false),
                    on_submit: submit,
                }
            }

            SearchInput { query: search, placeholder: "Search suppliers..." }

            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Supplier" }
                                th { "Email" }
                            }
                        }
                        tbody {
                            for (index, supplier) in filtered.iter().enumerate() {
                                tr { key: "{display_key(supplier.id.as_deref(), index)}",
                                    td { class: "cell-strong", "{supplier.name}" }
                                    td {
                                        a { href: "mailto:{supplier.email}", "{supplier.email}" }
                                    }
                                }
                            }
                        }
                    }
                }
                if filtered.is_empty() {
                    EmptyState {
                        title: "No suppliers found",
                        hint: empty_hint,
                    }
                }
            }
        }
    }
}

#[component]
fn CreateSupplierModal(
    mut draft: Signal<SupplierDraft>,
    creating: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let can_submit = draft.read().validate().is_ok();

    rsx! {
        Modal {
            title: "Add New Supplier",
            on_close: move |_| {
                if !creating {
                    on_close.call(());
                }
            },
            footer: rsx! {
                button {
                    class: "btn btn-secondary",
                    disabled: creating,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: !can_submit || creating,
                    onclick: move |_| on_submit.call(()),
                    if creating { "Creating..." } else { "Create Supplier" }
                }
            },
            div { class: "form-group",
                label { class: "form-label", r#for: "name", "Supplier Name" }
                input {
                    id: "name",
                    class: "form-input",
                    r#type: "text",
                    required: true,
                    placeholder: "Enter supplier name",
                    value: draft.read().name.clone(),
                    oninput: move |e| draft.write().name = e.value(),
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "email", "Email" }
                input {
                    id: "email",
                    class: "form-input",
                    r#type: "email",
                    required: true,
                    placeholder: "e.g. sales@example.com",
                    value: draft.read().email.clone(),
                    oninput: move |e| draft.write().email = e.value(),
                }
            }
        }
    }
}
