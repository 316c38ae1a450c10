#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use pa_catalog::{
    AssetResolver,
    Cli, // The struct from lib.rs
    catalog_sources,
    load_first_catalog,
    run_app, // The function from lib.rs
};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast; // <--- REQUIRED for .dyn_into()
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🔊 PA catalog starting in WASM mode...");

    // B. Load the built-in catalog (no command line in the browser)
    let args = Cli {
        catalog: None,
        assets_dir: std::path::PathBuf::from("."),
    };
    let (catalog, signature) = load_first_catalog(&catalog_sources(&args))
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
    log::info!("Loaded {} products from {}", catalog.len(), signature);
    let assets = AssetResolver::from_page();

    // C. Find the canvas element by ID
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document on the global window")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // D. Start the App
    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(run_app(cc, catalog, assets))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use pa_catalog::config::APP_STATE_PATH;
    use pa_catalog::ui::config::UI_TEXT;
    use std::path::PathBuf;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Catalog Loading
    let (catalog, signature) = match load_first_catalog(&catalog_sources(&args)) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("⚠️  {:#}", e);
            std::process::exit(1);
        }
    };
    log::info!("Loaded {} products from {}", catalog.len(), signature);
    let assets = AssetResolver::from_dir(&args.assets_dir);

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, catalog, assets))),
    )
}
