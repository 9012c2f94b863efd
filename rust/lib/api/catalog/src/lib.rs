//! Endpoint catalog: the read-only registry of endpoint descriptors.
//!
//! Loaded once (built-in or from a catalog file), validated, then only read.

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod loader;
pub mod sort;
pub mod validate;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use loader::CatalogFile;
pub use sort::{SortKey, SortOrder, TableSort};
pub use validate::{validate_endpoints, ValidationError};
