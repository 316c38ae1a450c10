// Native-only tool: reads catalog files from disk
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    native::check_catalog(path)
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Context, Result, bail};
    use itertools::Itertools;
    use pa_catalog::catalog::{CatalogQuery, filter, unique_categories};
    use pa_catalog::data::{CatalogSource, EmbeddedCatalog, FileCatalog};
    use std::path::PathBuf;

    /// Validates a catalog document (or the built-in one) and prints a summary.
    pub fn check_catalog(path: Option<PathBuf>) -> Result<()> {
        let source: Box<dyn CatalogSource> = match path {
            Some(path) => Box::new(FileCatalog { path }),
            None => Box::new(EmbeddedCatalog),
        };
        let catalog = source
            .load_catalog()
            .with_context(|| format!("{} did not validate", source.signature()))?;

        if catalog.is_empty() {
            bail!("{} has no products", source.signature());
        }

        println!(
            "Loaded {} products from {}",
            catalog.len(),
            source.signature()
        );

        for category in unique_categories(catalog.products()) {
            let query = CatalogQuery::new("", category.as_str());
            let ids = filter(catalog.products(), &query)
                .iter()
                .map(|p| p.id.as_str())
                .join(", ");
            println!("  {:<32} {}", category, ids);
        }

        let without_specs = catalog
            .products()
            .iter()
            .filter(|p| p.specs.is_empty())
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>();
        if !without_specs.is_empty() {
            println!("⚠️  Products without specs: {}", without_specs.join(", "));
        }

        println!("✅ Catalog is valid.");
        Ok(())
    }
}
