mod analytics;
pub use analytics::Analytics;

mod dashboard;
pub use dashboard::Dashboard;

mod products;
pub use products::Products;

mod suppliers;
pub use suppliers::Suppliers;

mod users;
pub use users::Users;
