#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod catalog;
pub mod config;
pub mod data;
pub mod domain;
pub mod peripheral;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use catalog::{CatalogQuery, CatalogView, DetailModal, filter, render};
pub use data::{Catalog, CatalogSource, catalog_sources, load_first_catalog};
pub use domain::{Badge, Product, Theme};
pub use ui::{AssetResolver, CatalogApp};
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog JSON file to show instead of the built-in product list
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Directory that product image and audio paths are relative to
    #[arg(long, default_value = ".")]
    pub assets_dir: PathBuf,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    catalog: Catalog,
    assets: AssetResolver,
) -> Box<dyn eframe::App> {
    let app = ui::CatalogApp::new(cc, catalog, assets);
    Box::new(app)
}
