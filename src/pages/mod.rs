//! Routed pages.

mod home;
mod products;
mod todos;

pub use home::HomePage;
pub use products::ProductsPage;
pub use todos::TodosPage;
