use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Settings for the chart page module
#[derive(Debug, Clone)]
pub struct PageSettings {
    /// Default log level for the module
    pub log_level: Level,

    /// Quiet period before a window resize is applied to the chart
    pub resize_debounce_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            resize_debounce_ms: 150,
            debug_mode: false,
        }
    }
}

impl PageSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(log_level)) = storage.get_item("agp_log_level") {
                if let Ok(level) = log_level.parse::<Level>() {
                    settings.log_level = level;
                }
            }

            if let Ok(Some(debounce)) = storage.get_item("agp_resize_debounce_ms") {
                if let Ok(debounce) = debounce.parse::<u32>() {
                    settings.resize_debounce_ms = debounce;
                }
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(
                    "agp_log_level",
                    &self.log_level.as_str().to_lowercase(),
                )?;
                storage.set_item(
                    "agp_resize_debounce_ms",
                    &self.resize_debounce_ms.to_string(),
                )?;
            }
        }
        Ok(())
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<PageSettings> = RefCell::new(PageSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> PageSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut PageSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at module start)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = PageSettings::from_environment();
    });
}
