use anyhow::{Context, Result, anyhow};

use crate::Cli;
use crate::data::catalog::Catalog;

const EMBEDDED_CATALOG_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/catalog.json"));

/// Somewhere a catalog can be loaded from.
pub trait CatalogSource {
    // Either produce a validated catalog OR return an anyhow::Error
    fn load_catalog(&self) -> Result<Catalog>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Tries each source in turn and returns the first catalog that loads.
pub fn load_first_catalog(sources: &[Box<dyn CatalogSource>]) -> Result<(Catalog, &'static str)> {
    for source in sources {
        match source.load_catalog() {
            Ok(catalog) => return Ok((catalog, source.signature())),
            Err(e) => {
                log::warn!("Catalog source '{}' failed: {:#}", source.signature(), e);
            }
        }
    }
    Err(anyhow!("All catalog sources failed to load"))
}

/// The catalog compiled into the binary.
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn signature(&self) -> &'static str {
        "Embedded Catalog"
    }

    fn load_catalog(&self) -> Result<Catalog> {
        Catalog::from_json(EMBEDDED_CATALOG_JSON).context("Failed to parse embedded catalog")
    }
}

/// A catalog document on disk, used to swap the product set without rebuilding.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileCatalog {
    pub path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl CatalogSource for FileCatalog {
    fn signature(&self) -> &'static str {
        "Catalog File"
    }

    fn load_catalog(&self) -> Result<Catalog> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read catalog file: {}", self.path.display()))?;
        Catalog::from_json(&text)
            .with_context(|| format!("Invalid catalog file: {}", self.path.display()))
    }
}

/// Sources for this run, most specific first. The embedded catalog is always last.
pub fn catalog_sources(args: &Cli) -> Vec<Box<dyn CatalogSource>> {
    let mut sources: Vec<Box<dyn CatalogSource>> = Vec::new();

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = &args.catalog {
        sources.push(Box::new(FileCatalog { path: path.clone() }));
    }
    #[cfg(target_arch = "wasm32")]
    let _ = args;

    sources.push(Box::new(EmbeddedCatalog));
    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSource;

    impl CatalogSource for BrokenSource {
        fn signature(&self) -> &'static str {
            "Broken"
        }

        fn load_catalog(&self) -> Result<Catalog> {
            Err(anyhow!("unavailable"))
        }
    }

    #[test]
    fn falls_back_to_next_source() {
        let sources: Vec<Box<dyn CatalogSource>> = vec![Box::new(BrokenSource), Box::new(EmbeddedCatalog)];
        let (catalog, signature) = load_first_catalog(&sources).unwrap();
        assert_eq!(signature, "Embedded Catalog");
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn all_sources_failing_is_an_error() {
        let sources: Vec<Box<dyn CatalogSource>> = vec![Box::new(BrokenSource)];
        assert!(load_first_catalog(&sources).is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_file_reports_its_path() {
        let source = FileCatalog {
            path: std::path::PathBuf::from("does/not/exist.json"),
        };
        let err = source.load_catalog().unwrap_err();
        assert!(format!("{:#}", err).contains("does/not/exist.json"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn bad_catalog_flag_falls_back_to_embedded() {
        let args = Cli {
            catalog: Some(std::path::PathBuf::from("does/not/exist.json")),
            assets_dir: std::path::PathBuf::from("."),
        };
        let sources = catalog_sources(&args);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].signature(), "Catalog File");

        let (catalog, signature) = load_first_catalog(&sources).unwrap();
        assert_eq!(signature, "Embedded Catalog");
        assert!(catalog.get("hl30a").is_some());
    }
}
