use serde::{Deserialize, Serialize};

use crate::catalog::search::{index_text, normalize};
use crate::domain::Product;

/// Current search text and category selection. An empty field means "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub text: String,
    pub category: String,
}

impl CatalogQuery {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// The search text as it is compared against the index.
    pub fn needle(&self) -> String {
        normalize(self.text.trim())
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category.is_empty() && self.needle().is_empty()
    }
}

/// Stable filter: keeps products in the order given, dropping those outside
/// the selected category (exact match) or whose index text lacks the needle.
pub fn filter<'a, I>(products: I, query: &CatalogQuery) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = query.needle();
    let category = query.category.as_str();

    products
        .into_iter()
        .filter(|p| category.is_empty() || p.category == category)
        .filter(|p| needle.is_empty() || index_text(p).contains(&needle))
        .collect()
}
