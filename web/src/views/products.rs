use crate::{hooks::use_fetched, use_api};
use dioxus::prelude::*;
use types::{
    ProductDraft, format,
    search::{self, display_key},
};
use ui::{EmptyState, LoadingRows, Modal, SearchInput};

#[component]
pub fn Products() -> Element {
    let api = use_api();
    let products = use_fetched("products", {
        let api = api.clone();
        move || {
            let products = api.products();
            async move { products.get_all().await }
        }
    });
    let search = use_signal(String::new);
    let mut show_create_form = use_signal(|| false);
    let mut draft = use_signal(ProductDraft::default);
    let mut creating = use_signal(|| false);

    // Runs in this view's scope, so closing the modal cannot drop it midway.
    let submit = move |()| {
        let client = api.products();
        let submitted = draft.read().clone();
        spawn(async move {
            creating.set(true);
            match client.create_from_draft(&submitted).await {
                Ok(created) => {
                    draft.set(ProductDraft::default());
                    show_create_form.set(false);
                    products.settle(created.reload);
                }
                Err(error) => tracing::error!(%error, "failed to create product"),
            }
            creating.set(false);
        });
    };

    let state = products.state.read();
    if state.loading {
        return rsx! { LoadingRows { count: 5 } };
    }
    let query = search.read();
    let filtered = search::filter(&state.value, &query);
    let empty_hint = if query.is_empty() {
        "Get started by adding a new product."
    } else {
        "Try adjusting your search terms."
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Products" }
                    p { class: "page-subtitle", "Manage your product inventory." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create_form.set(true),
                        "Add Product"
                    }
                }
            }

            if *show_create_form.read() {
                CreateProductModal {
                    draft,
                    creating: creating(),
                    on_close: move |_| show_create_form.set(false),
                    on_submit: submit,
                }
            }

            SearchInput { query: search, placeholder: "Search products..." }

            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Product" }
                                th { "Category" }
                                th { "Price" }
                                th { "Stock" }
                                th { "Rating" }
                            }
                        }
                        tbody {
                            for (index, product) in filtered.iter().enumerate() {
                                {
                                    let status = product.stock_status();
                                    rsx! {
                                        tr { key: "{display_key(product.id.as_deref(), index)}",
                                            td { class: "cell-strong", "{product.nombre}" }
                                            td {
                                                span { class: "badge", "{product.categoria}" }
                                            }
                                            td { {format::currency(product.precio)} }
                                            td {
                                                div { class: "cell-stack",
                                                    span { "{product.stock} units" }
                                                    span { class: status.css_class(), {status.label()} }
                                                }
                                            }
                                            td { class: "rating", "★ {product.calificacion}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                if filtered.is_empty() {
                    EmptyState {
                        title: "No products found",
                        hint: empty_hint,
                    }
                }
            }
        }
    }
}

#[component]
fn CreateProductModal(
    mut draft: Signal<ProductDraft>,
    creating: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let can_submit = {
        let d = draft.read();
        [&d.nombre, &d.precio, &d.stock, &d.calificacion, &d.categoria]
            .iter()
            .all(|field| !field.trim().is_empty())
    };

    rsx! {
        Modal {
            title: "Add New Product",
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
                    if creating { "Creating..." } else { "Create Product" }
                }
            },
            div { class: "form-group",
                label { class: "form-label", r#for: "nombre", "Product Name" }
                input {
                    id: "nombre",
                    class: "form-input",
                    r#type: "text",
                    required: true,
                    placeholder: "Enter product name",
                    value: draft.read().nombre.clone(),
                    oninput: move |e| draft.write().nombre = e.value(),
                }
            }
            div { class: "form-row",
                div { class: "form-group",
                    label { class: "form-label", r#for: "precio", "Price" }
                    input {
                        id: "precio",
                        class: "form-input",
                        r#type: "number",
                        step: "0.01",
                        required: true,
                        placeholder: "0.00",
                        value: draft.read().precio.clone(),
                        oninput: move |e| draft.write().precio = e.value(),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "stock", "Stock" }
                    input {
                        id: "stock",
                        class: "form-input",
                        r#type: "number",
                        required: true,
                        placeholder: "0",
                        value: draft.read().stock.clone(),
                        oninput: move |e| draft.write().stock = e.value(),
                    }
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "categoria", "Category" }
                input {
                    id: "categoria",
                    class: "form-input",
                    r#type: "text",
                    required: true,
                    placeholder: "Enter category",
                    value: draft.read().categoria.clone(),
                    oninput: move |e| draft.write().categoria = e.value(),
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "calificacion", "Rating" }
                select {
                    id: "calificacion",
                    class: "form-input",
                    required: true,
                    value: draft.read().calificacion.clone(),
                    onchange: move |e| draft.write().calificacion = e.value(),
                    option { value: "", "Select rating" }
                    option { value: "1", "1 Star" }
                    option { value: "2", "2 Stars" }
                    option { value: "3", "3 Stars" }
                    option { value: "4", "4 Stars" }
                    option { value: "5", "5 Stars" }
                }
            }
        }
    }
}
