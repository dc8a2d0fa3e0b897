#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use forecast_dashboard::run_app;

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast; // <--- REQUIRED for .dyn_into()
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
    use forecast_dashboard::config::{API, ApiConfig, AppConfig};
    use forecast_dashboard::pages::Route;

    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Forecast dashboard starting in WASM mode...");

    // B. Locate the service: build-time override, else the page's own origin
    let window = web_sys::window().ok_or("no global `window` exists")?;
    let location = window.location();
    let base_url = match option_env!("FORECAST_API_URL") {
        Some(url) => url.to_string(),
        None => location.origin()?,
    };
    let api = ApiConfig::new(&base_url).map_err(|e| {
        JsValue::from_str(&format!("Invalid {} '{}': {}", API.base_url_env, base_url, e))
    })?;

    let mut config = AppConfig::new(api);
    config.start_route = Some(Route::from_path(&location.pathname()?));

    // C. Find the canvas element by ID
    let document = window.document().ok_or("should have a document on window")?;
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
            Box::new(move |cc| Ok(run_app(cc, config))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use eframe::NativeOptions;
    use forecast_dashboard::Cli;
    use forecast_dashboard::config::{APP_ID, AppConfig};
    use tokio::runtime::Runtime;

    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);
    let config = AppConfig::from_cli(&args).context("Invalid configuration")?;

    // C. Runtime for the fetch promises; entered so the UI thread can spawn onto it
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let _guard = rt.enter();

    // D. Run Native App
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_app_id(APP_ID),
        ..Default::default()
    };

    eframe::run_native(
        APP_ID,
        options,
        Box::new(move |cc| Ok(run_app(cc, config))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {}", e))
}
