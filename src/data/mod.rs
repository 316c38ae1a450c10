// Catalog loading and validation
pub mod catalog;
pub mod source;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, CatalogFile};
pub use source::{CatalogSource, EmbeddedCatalog, catalog_sources, load_first_catalog};
#[cfg(not(target_arch = "wasm32"))]
pub use source::FileCatalog;
