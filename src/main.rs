#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[allow(unused_imports)]
use lens_guide::{Cli, run_app};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This keeps the WASM memory allocator from being stripped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

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

    log::info!("🔍 LensGuide starting in WASM mode...");

    // B. Setup for Web
    let web_options = eframe::WebOptions::default();

    // 1. Get the browser window and document
    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // 2. Find the canvas element by ID
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .expect("Failed to find canvas with id 'the_canvas_id'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // 3. Start the app on the canvas
    eframe::WebRunner::new()
        .start(canvas, web_options, Box::new(|cc| Ok(run_app(cc))))
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use lens_guide::cache::{AssetServiceOptions, spawn_asset_services};
    use lens_guide::ui::config::UI_TEXT;
    use lens_guide::{GenerationStore, HttpAssetSource};
    use std::sync::Arc;
    use tokio::runtime::Runtime;

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

    // C. Asset services: background cache install plus connectivity probe.
    // The app starts immediately either way; these only feed it later.
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let asset_client = match HttpAssetSource::new(args.asset_base.clone()) {
        Ok(source) => {
            let store = GenerationStore::new(args.cache_dir.clone());
            let options = AssetServiceOptions {
                offline: args.offline,
                refresh: args.refresh_assets,
            };
            Some(spawn_asset_services(
                rt.handle(),
                store,
                Arc::new(source),
                options,
            ))
        }
        Err(e) => {
            log::error!("⚠️  Asset services disabled: {e:#}");
            None
        }
    };

    // D. Run Native App
    let options = NativeOptions::default();
    let handle = rt.handle().clone();

    eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, asset_client, handle))),
    )
}
