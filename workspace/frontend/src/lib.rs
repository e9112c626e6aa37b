use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

mod dom;
mod navigation;
mod page;
mod plotly;
mod surface;
pub mod settings;

pub use navigation::{change_date, change_period_days};

fn run_page() {
    if let Err(err) = page::init() {
        log::error!("Failed to initialize chart page: {:?}", err);
    }
}

/// Stores a new log level for later visits. Within the current page only
/// lowering the verbosity takes effect, since the console logger keeps the
/// level it was started with.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let level: log::Level = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("unknown log level: {level}")))?;

    settings::update_settings(|s| s.log_level = level);
    log::set_max_level(level.to_level_filter());
    log::info!("Log level set to {}", level);
    settings::get_settings().save_to_storage()
}

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== AGP Chart Module Starting ===");
    log::debug!("Module settings: {:?}", settings);

    navigation::install_globals()?;

    let document = dom::document()?;
    if document.ready_state() == "loading" {
        log::trace!("Waiting for DOMContentLoaded");
        let closure = Closure::once(run_page);
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
    } else {
        run_page();
    }
    Ok(())
}
