use dioxus::prelude::*;
use types::ClientConfig;

mod client;
mod error;
mod resource;

pub use client::{ApiClient, Created, ResourceClient};
pub use error::{Error, Result};
pub use resource::{Products, Resource, Suppliers, Users};

/// Where the browser should send its REST calls.
#[get("/console/config")]
pub async fn client_config() -> ServerFnResult<ClientConfig> {
    Ok(server::client_config())
}
