//! The parameter catalog: authoritative enumerations, the HTTP surface that
//! publishes them, and the client/session pair that consumes them.

pub mod client;
pub mod domain;
pub mod router;
pub mod session;
pub mod store;

pub use client::{CatalogClient, CatalogFetchError};
pub use domain::{CatalogError, Category, CategoryName};
pub use router::catalog_router;
pub use session::CatalogSession;
pub use store::CatalogStore;
