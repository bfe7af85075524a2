// Service exports
pub mod catalog;

pub use catalog::{SchemeCatalog, CatalogError};
