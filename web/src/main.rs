use api::ApiClient;
use dioxus::prelude::*;
use types::ClientConfig;

mod hooks;
mod views;

use views::{Analytics, Dashboard, Products, Suppliers, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ConsoleLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/products")]
        Products {},
        #[route("/suppliers")]
        Suppliers {},
        #[route("/analytics")]
        Analytics {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init()?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Admin Console" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// Unknown paths fall back to the dashboard.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = navigator();
    use_effect(move || {
        tracing::debug!(path = %segments.join("/"), "unknown route");
        nav.replace(Route::Dashboard {});
    });
    rsx! {}
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// The API client every view talks through. Provided by `ConsoleLayout`.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

fn build_client(config: Option<&Result<ClientConfig, ServerFnError>>) -> Option<ApiClient> {
    let config = match config {
        Some(Ok(config)) => config.clone(),
        Some(Err(error)) => {
            tracing::error!(%error, "failed to load console config, using defaults");
            ClientConfig::default()
        }
        None => ClientConfig::default(),
    };

    match ApiClient::new(&config.api_base_url) {
        Ok(client) => Some(client),
        Err(error) => {
            tracing::error!(%error, url = %config.api_base_url, "invalid API base url");
            None
        }
    }
}

#[component]
fn ConsoleLayout() -> Element {
    let config = use_server_future(api::client_config)?;
    let client = use_hook(move || build_client(config.read().as_ref()));

    let Some(client) = client else {
        return rsx! {
            div { class: "loading", "The console is misconfigured: the API url is invalid." }
        };
    };
    use_context_provider(move || client);

    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "Admin Console" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Dashboard {}, "Dashboard" }
                    NavLink { to: Route::Users {}, "Users" }
                    NavLink { to: Route::Products {}, "Products" }
                    NavLink { to: Route::Suppliers {}, "Suppliers" }
                    NavLink { to: Route::Analytics {}, "Analytics" }
                }
            }
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
