use log::Level;
use web_sys::window;

use crate::storage::{BrowserStorage, StorageError, StoragePort};

const KEY_API_BASE: &str = "stash_api_base";
const KEY_LOG_LEVEL: &str = "stash_log_level";
const KEY_DEBUG: &str = "stash_debug";
const KEY_TOAST_DURATION: &str = "stash_toast_duration_ms";

const OVERRIDE_KEYS: [&str; 4] = [KEY_API_BASE, KEY_LOG_LEVEL, KEY_DEBUG, KEY_TOAST_DURATION];

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Base path or absolute URL of the REST API (e.g. "/api")
    pub api_base: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.apply_host(&hostname);
            }
        }

        settings.load_overrides(&BrowserStorage);
        settings
    }

    /// Development hosts get verbose logging.
    pub fn apply_host(&mut self, hostname: &str) {
        self.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
        if self.debug_mode {
            self.log_level = Level::Debug;
        }
    }

    pub fn load_overrides(&mut self, store: &dyn StoragePort) {
        for key in OVERRIDE_KEYS {
            if let Some(value) = store.get(key) {
                if !self.apply_override(key, &value) {
                    log::warn!("Ignoring invalid setting {}={}", key, value);
                }
            }
        }
    }

    /// Applies one stored override. Returns `false` for unknown keys or values
    /// that do not parse, leaving the setting untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> bool {
        match key {
            KEY_API_BASE if !value.trim().is_empty() => {
                self.api_base = value.trim().to_string();
                true
            }
            KEY_LOG_LEVEL => match parse_level(value) {
                Some(level) => {
                    self.log_level = level;
                    true
                }
                None => false,
            },
            KEY_DEBUG => match value.trim().to_lowercase().as_str() {
                "true" => {
                    self.debug_mode = true;
                    true
                }
                "false" => {
                    self.debug_mode = false;
                    true
                }
                _ => false,
            },
            KEY_TOAST_DURATION => match value.trim().parse::<u32>() {
                Ok(ms) => {
                    self.toast_duration_ms = ms;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }

    pub fn save_to(&self, store: &dyn StoragePort) -> Result<(), StorageError> {
        store.set(KEY_API_BASE, &self.api_base)?;
        store.set(KEY_LOG_LEVEL, &self.log_level.as_str().to_lowercase())?;
        store.set(KEY_DEBUG, &self.debug_mode.to_string())?;
        store.set(KEY_TOAST_DURATION, &self.toast_duration_ms.to_string())?;
        Ok(())
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), StorageError> {
        self.save_to(&BrowserStorage)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), endpoint)
    }
}

use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
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

pub fn api_url(endpoint: &str) -> String {
    SETTINGS.with(|s| s.borrow().api_url(endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base, "/api");
        assert_eq!(settings.log_level, Level::Info);
        assert_eq!(settings.toast_duration_ms, 5000);
        assert_eq!(settings.api_url("/dashboard"), "/api/dashboard");
    }

    #[test]
    fn test_localhost_enables_debug() {
        let mut settings = AppSettings::default();
        settings.apply_host("127.0.0.1");
        assert!(settings.debug_mode);
        assert_eq!(settings.log_level, Level::Debug);

        let mut settings = AppSettings::default();
        settings.apply_host("stash.example.com");
        assert!(!settings.debug_mode);
        assert_eq!(settings.log_level, Level::Info);
    }

    #[test]
    fn test_overrides() {
        let mut settings = AppSettings::default();
        assert!(settings.apply_override("stash_api_base", "http://localhost:8000/api/"));
        assert!(settings.apply_override("stash_log_level", "TRACE"));
        assert!(settings.apply_override("stash_toast_duration_ms", "2500"));
        assert_eq!(settings.api_url("/fx"), "http://localhost:8000/api/fx");
        assert_eq!(settings.log_level, Level::Trace);
        assert_eq!(settings.toast_duration_ms, 2500);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut settings = AppSettings::default();
        assert!(!settings.apply_override("stash_log_level", "loud"));
        assert!(!settings.apply_override("stash_toast_duration_ms", "-1"));
        assert!(!settings.apply_override("stash_api_base", "  "));
        assert!(!settings.apply_override("legacy_api_host", "x"));
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let saved = AppSettings {
            api_base: "/v2/api".to_string(),
            log_level: Level::Warn,
            debug_mode: true,
            toast_duration_ms: 1200,
        };
        saved.save_to(&store).unwrap();

        let mut loaded = AppSettings::default();
        loaded.load_overrides(&store);
        assert_eq!(loaded, saved);
    }
}
