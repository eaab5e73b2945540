//! Application Configuration
//!
//! Defaults, optionally overridden from the page query string (`?log=debug`).

use std::str::FromStr;

use log::LevelFilter;

/// localStorage key holding the todo list
pub const DEFAULT_STORAGE_KEY: &str = "todos";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: &'static str,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Parse `key=value` pairs; unknown keys and bad values are ignored
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='));
        for (key, value) in pairs {
            if key == "log" {
                if let Ok(level) = LevelFilter::from_str(value) {
                    config.log_level = level;
                }
            }
        }
        config
    }

    /// Config for the current page
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}
