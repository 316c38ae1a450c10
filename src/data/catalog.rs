use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::Product;

/// Validation failures raised while building a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog document could not be parsed
    Parse(String),
    /// A product has an empty id
    EmptyId { index: usize },
    /// Two products share an id
    DuplicateId(String),
    /// A product has no images, so there is nothing to put on its card
    MissingImages(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "Catalog parse error: {}", msg),
            CatalogError::EmptyId { index } => write!(f, "Product #{} has an empty id", index),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate product id: {}", id),
            CatalogError::MissingImages(id) => write!(f, "Product '{}' has no images", id),
        }
    }
}

impl std::error::Error for CatalogError {}

/// On-disk shape of a catalog document.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct CatalogFile {
    #[serde(default, alias = "productos")]
    pub products: Vec<Product>,
}

/// The ordered product list for a session. Read-only once built.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty/duplicate ids and products without images.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, product) in products.iter().enumerate() {
            if product.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if product.images.is_empty() {
                return Err(CatalogError::MissingImages(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks a product up by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
