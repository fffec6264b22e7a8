use serde::{Serialize, de::DeserializeOwned};
use types::{NewProduct, Product, Supplier, SupplierDraft, User};

/// A backend collection with list and create endpoints.
pub trait Resource {
    /// Path below the API base url.
    const PATH: &'static str;

    type Record: DeserializeOwned;
    type New: Serialize;
}

pub struct Users;

impl Resource for Users {
    const PATH: &'static str = "users";
    type Record = User;
    type New = User;
}

pub struct Products;

impl Resource for Products {
    const PATH: &'static str = "products";
    type Record = Product;
    type New = NewProduct;
}

pub struct Suppliers;

impl Resource for Suppliers {
    const PATH: &'static str = "suppliers";
    type Record = Supplier;
    type New = SupplierDraft;
}
