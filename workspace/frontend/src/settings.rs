use std::cell::RefCell;

use log::Level;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

const LOG_LEVEL_KEY: &str = "chainfund_log_level";
const TOAST_DURATION_KEY: &str = "chainfund_toast_duration_ms";
const TICK_PERIOD_KEY: &str = "chainfund_tick_period_ms";
const FAIL_ACTIONS_KEY: &str = "chainfund_fail_actions";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Refresh period of live countdowns in milliseconds
    pub tick_period_ms: u32,

    /// Make every marketplace action fail, to exercise error paths
    pub fail_actions: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
            tick_period_ms: common::countdown::TICK_PERIOD.as_millis() as u32,
            fail_actions: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage overrides
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
            settings.apply_overrides(&storage);
        }

        settings
    }

    fn apply_overrides(&mut self, storage: &Storage) {
        if let Ok(Some(log_level)) = storage.get_item(LOG_LEVEL_KEY) {
            self.log_level = match log_level.to_lowercase().as_str() {
                "error" => Level::Error,
                "warn" => Level::Warn,
                "info" => Level::Info,
                "debug" => Level::Debug,
                "trace" => Level::Trace,
                _ => self.log_level,
            };
        }

        if let Ok(Some(duration)) = storage.get_item(TOAST_DURATION_KEY) {
            if let Ok(duration) = duration.parse::<u32>() {
                self.toast_duration_ms = duration;
            }
        }

        if let Ok(Some(period)) = storage.get_item(TICK_PERIOD_KEY) {
            // A zero period would spin the interval
            if let Some(period) = period.parse::<u32>().ok().filter(|p| *p > 0) {
                self.tick_period_ms = period;
            }
        }

        if let Ok(Some(fail_actions)) = storage.get_item(FAIL_ACTIONS_KEY) {
            self.fail_actions = fail_actions.to_lowercase() == "true";
        }
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(LOG_LEVEL_KEY, &self.log_level.as_str().to_lowercase())?;
                storage.set_item(TOAST_DURATION_KEY, &self.toast_duration_ms.to_string())?;
                storage.set_item(TICK_PERIOD_KEY, &self.tick_period_ms.to_string())?;
                storage.set_item(FAIL_ACTIONS_KEY, &self.fail_actions.to_string())?;
            }
        }
        Ok(())
    }
}

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
