//! Integration tests running the API client against a mock backend.

use api::{ApiClient, Error};
use httpmock::prelude::*;
use serde_json::json;
use types::{Loadable, Product, ProductDraft, SupplierDraft};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&format!("{}/api", server.base_url())).unwrap()
}

#[tokio::test]
async fn get_all_keeps_backend_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200).json_body(json!([
            { "_id": "b", "nombre": "Zeta", "precio": 3.0, "stock": 60, "calificacion": 4, "categoria": "Tools" },
            { "_id": "a", "nombre": "Alpha", "precio": 1.5, "stock": 2, "calificacion": "2", "categoria": "Garden" }
        ]));
    });

    let products = client_for(&server).products().get_all().await.unwrap();

    mock.assert();
    let names: Vec<_> = products.iter().map(|p| p.nombre.as_str()).collect();
    assert_eq!(names, ["Zeta", "Alpha"]);
    assert_eq!(products[1].calificacion, 2);
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/api/users");
        then.status(500);
    });

    let result = client_for(&server).users().get_all().await;

    match result {
        Err(Error::Http { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    // Nothing listens on port 1.
    let client = ApiClient::new("http://127.0.0.1:1/api").unwrap();

    let result = client.suppliers().get_all().await;

    assert!(matches!(result, Err(Error::Network(_))), "{result:?}");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/api/suppliers");
        then.status(200).body("<html>oops</html>");
    });

    let result = client_for(&server).suppliers().get_all().await;

    assert!(matches!(result, Err(Error::Decode(_))), "{result:?}");
}

#[tokio::test]
async fn create_product_posts_parsed_numbers_and_reloads_list() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/products")
            .header("content-type", "application/json")
            .json_body(json!({
                "nombre": "Widget",
                "precio": 9.99,
                "stock": 5,
                "calificacion": "3",
                "categoria": "Tools"
            }));
        then.status(201).json_body(json!({
            "_id": "new-id",
            "nombre": "Widget",
            "precio": 9.99,
            "stock": 5,
            "calificacion": 3,
            "categoria": "Tools"
        }));
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200).json_body(json!([
            { "_id": "old-id", "nombre": "Hammer", "precio": 12.0, "stock": 40, "calificacion": 5, "categoria": "Tools" },
            { "_id": "new-id", "nombre": "Widget", "precio": 9.99, "stock": 5, "calificacion": 3, "categoria": "Tools" }
        ]));
    });

    let draft = ProductDraft {
        nombre: "Widget".into(),
        precio: "9.99".into(),
        stock: "5".into(),
        calificacion: "3".into(),
        categoria: "Tools".into(),
    };
    let created = client_for(&server)
        .products()
        .create_from_draft(&draft)
        .await
        .unwrap();

    create.assert();
    list.assert();
    assert_eq!(created.response["_id"], "new-id");

    let mut state = Loadable::<Vec<Product>>::default();
    state.resolve(created.reload);
    let ids: Vec<_> = state.value.iter().filter_map(|p| p.id.as_deref()).collect();
    assert_eq!(ids, ["old-id", "new-id"]);
}

#[tokio::test]
async fn failed_create_skips_reload() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/suppliers");
        then.status(500);
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/suppliers");
        then.status(200).json_body(json!([]));
    });

    let draft = SupplierDraft {
        name: "Acme".into(),
        email: "sales@acme.test".into(),
    };
    let result = client_for(&server).suppliers().create_from_draft(&draft).await;

    assert!(matches!(result, Err(Error::Http { status: 500, .. })), "{result:?}");
    create.assert();
    list.assert_hits(0);
}

#[tokio::test]
async fn failed_reload_keeps_previous_list() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/products");
        then.status(201);
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(502);
    });

    let previous = Product {
        id: Some("old-id".into()),
        nombre: "Hammer".into(),
        precio: 12.0,
        stock: 40,
        calificacion: 5,
        categoria: "Tools".into(),
    };
    let mut state = Loadable::<Vec<Product>>::default();
    state.resolve(Ok::<_, Error>(vec![previous.clone()]));

    let draft = ProductDraft {
        nombre: "Widget".into(),
        precio: "9.99".into(),
        stock: "5".into(),
        calificacion: "3".into(),
        categoria: "Tools".into(),
    };
    let created = client_for(&server)
        .products()
        .create_from_draft(&draft)
        .await
        .unwrap();
    state.resolve(created.reload);

    create.assert();
    list.assert();
    assert!(!state.loading);
    assert_eq!(state.value, [previous]);
    assert!(state.error.is_some());
}

#[tokio::test]
async fn invalid_draft_never_hits_backend() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/products");
        then.status(201);
    });

    let draft = ProductDraft {
        nombre: "Widget".into(),
        precio: "cheap".into(),
        stock: "5".into(),
        calificacion: "3".into(),
        categoria: "Tools".into(),
    };
    let result = client_for(&server).products().create_from_draft(&draft).await;

    assert!(matches!(result, Err(Error::Draft(_))), "{result:?}");
    create.assert_hits(0);
}

#[tokio::test]
async fn create_supplier_sends_draft_verbatim() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/suppliers")
            .json_body(json!({ "name": "Acme", "email": "sales@acme.test" }));
        then.status(201);
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/suppliers");
        then.status(200)
            .json_body(json!([{ "_id": "s1", "name": "Acme", "email": "sales@acme.test" }]));
    });

    let draft = SupplierDraft {
        name: "Acme".into(),
        email: "sales@acme.test".into(),
    };
    let created = client_for(&server)
        .suppliers()
        .create_from_draft(&draft)
        .await
        .unwrap();

    // Empty 201 body.
    assert!(created.response.is_null());
    assert_eq!(created.reload.unwrap().len(), 1);
    create.assert();
    list.assert();
}

#[tokio::test]
async fn dashboard_counts_all_three() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/users");
        then.status(200).json_body(json!([{ "name": "a" }, { "name": "b" }]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200).json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/suppliers");
        then.status(200)
            .json_body(json!([{ "name": "s", "email": "s@example.test" }]));
    });

    let stats = client_for(&server).dashboard_stats().await.unwrap();

    assert_eq!(stats.users, 2);
    assert_eq!(stats.products, 0);
    assert_eq!(stats.suppliers, 1);
}

#[tokio::test]
async fn partial_records_still_count_and_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/users");
        then.status(200).json_body(json!([{ "name": "a" }, { "username": "b" }]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200).json_body(json!([
            { "_id": "p1", "nombre": "Widget", "precio": 2.5, "stock": 12.0, "calificacion": "", "categoria": "Tools" },
            { "_id": "p2", "nombre": "Gadget", "precio": 4.0, "stock": 3, "calificacion": 1 }
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/suppliers");
        then.status(200).json_body(json!([{ "name": "s" }]));
    });
    let client = client_for(&server);

    let stats = client.dashboard_stats().await.unwrap();
    assert_eq!(stats.users, 2);
    assert_eq!(stats.products, 2);
    assert_eq!(stats.suppliers, 1);

    let products = client.products().get_all().await.unwrap();
    assert_eq!(products[0].stock, 12);
    assert_eq!(products[1].categoria, "");
}

#[tokio::test]
async fn dashboard_count_ignores_record_contents() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/users");
        then.status(200).json_body(json!([1, "two", null]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200).json_body(json!([{ "nombre": ["not", "a", "string"] }]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/suppliers");
        then.status(200).json_body(json!([]));
    });

    let stats = client_for(&server).dashboard_stats().await.unwrap();

    assert_eq!(stats.users, 3);
    assert_eq!(stats.products, 1);
    assert_eq!(stats.suppliers, 0);
}

#[tokio::test]
async fn every_request_sends_json_headers() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/users")
            .header("accept", "application/json")
            .header("content-type", "application/json");
        then.status(200).json_body(json!([]));
    });

    let users = client_for(&server).users().get_all().await.unwrap();

    mock.assert();
    assert!(users.is_empty());
}

#[tokio::test]
async fn dashboard_join_is_all_or_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/users");
        then.status(200).json_body(json!([{ "name": "a" }]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200).json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/suppliers");
        then.status(503);
    });

    let mut state = Loadable::<types::DashboardStats>::default();
    state.resolve(client_for(&server).dashboard_stats().await);

    assert!(!state.loading);
    assert_eq!(state.value, types::DashboardStats::default());
    assert!(state.error.is_some());
}
