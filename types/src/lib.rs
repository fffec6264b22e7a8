pub mod analytics;
mod config;
mod dashboard;
mod error;
mod lenient;
pub mod format;
mod loadable;
mod product;
pub mod search;
mod supplier;
mod user;

pub use analytics::{CategoryBreakdown, InventoryAnalytics};
pub use config::{ClientConfig, DEFAULT_API_BASE_URL};
pub use dashboard::DashboardStats;
pub use error::DraftError;
pub use loadable::Loadable;
pub use product::{NewProduct, Product, ProductDraft, StockStatus};
pub use search::Searchable;
pub use supplier::{Supplier, SupplierDraft};
pub use user::User;
