use serde::{Deserialize, Serialize};

use crate::error::{DraftError, required};
use crate::lenient;
use crate::search::{Searchable, matches_any};

/// A product as the backend lists it.
///
/// Records are displayed, never validated: a missing or oddly typed field
/// falls back to its default instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nombre: String,
    #[serde(default, deserialize_with = "lenient::price")]
    pub precio: f64,
    #[serde(default, deserialize_with = "lenient::stock")]
    pub stock: i64,
    #[serde(default, deserialize_with = "lenient::rating")]
    pub calificacion: u8,
    #[serde(default, deserialize_with = "lenient::text")]
    pub categoria: String,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock)
    }
}

impl Searchable for Product {
    fn matches(&self, query: &str) -> bool {
        matches_any(query, &[&self.nombre, &self.categoria])
    }
}

/// Per-row label in the products table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    // NOTE: `stock == 10` is "Out of Stock" here while the analytics
    // low-stock count uses `< 10`. Both thresholds are intentional.
    pub fn classify(stock: i64) -> Self {
        if stock > 50 {
            Self::InStock
        } else if stock > 10 {
            Self::LowStock
        } else {
            Self::OutOfStock
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::InStock => "badge badge-success",
            Self::LowStock => "badge badge-warning",
            Self::OutOfStock => "badge badge-danger",
        }
    }
}

/// Request body for `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub nombre: String,
    pub precio: f64,
    pub stock: i64,
    pub calificacion: String,
    pub categoria: String,
}

/// Raw form input while the create-product modal is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub nombre: String,
    pub precio: String,
    pub stock: String,
    pub calificacion: String,
    pub categoria: String,
}

impl ProductDraft {
    /// Parse price and stock; every other field is sent as typed.
    pub fn to_new_product(&self) -> Result<NewProduct, DraftError> {
        let nombre = required("nombre", &self.nombre)?;
        let precio = required("precio", &self.precio)?;
        let stock = required("stock", &self.stock)?;
        let calificacion = required("calificacion", &self.calificacion)?;
        let categoria = required("categoria", &self.categoria)?;

        let precio = precio
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| DraftError::InvalidNumber {
                field: "precio",
                value: precio.to_string(),
            })?;
        let stock = stock.parse::<i64>().map_err(|_| DraftError::InvalidNumber {
            field: "stock",
            value: stock.to_string(),
        })?;

        Ok(NewProduct {
            nombre: nombre.to_string(),
            precio,
            stock,
            calificacion: calificacion.to_string(),
            categoria: categoria.to_string(),
        })
    }
}
