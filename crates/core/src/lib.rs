pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fixtures;

pub use catalog::{Catalog, CatalogService, SEARCH_RESULT_LIMIT};
pub use domain::product::{Product, ProductId};
pub use errors::CatalogError;
pub use fixtures::{FixtureError, SeedCatalog};
