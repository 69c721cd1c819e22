//! Persistence and environment helpers for the app shell.

use crate::core::endpoint::ApiBase;
use crate::theme::ThemeMode;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;

pub(crate) const THEME_KEY: &str = "reelforge.theme";
pub(crate) const REFRESH_SECS_KEY: &str = "reelforge.health.refresh_secs";

/// Bounds for the dependency-health refresh interval (seconds).
pub(crate) const REFRESH_SECS_MIN: u32 = 5;
pub(crate) const REFRESH_SECS_MAX: u32 = 120;
const REFRESH_SECS_DEFAULT: u32 = 30;

pub(crate) fn load_theme() -> ThemeMode {
    if let Ok(value) = LocalStorage::get::<String>(THEME_KEY) {
        return match value.as_str() {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        };
    }
    ThemeMode::Dark
}

pub(crate) fn persist_theme(mode: ThemeMode) {
    set_storage(THEME_KEY, mode.as_str());
}

pub(crate) fn load_refresh_secs() -> u32 {
    LocalStorage::get::<u32>(REFRESH_SECS_KEY).map_or(REFRESH_SECS_DEFAULT, |secs| {
        secs.clamp(REFRESH_SECS_MIN, REFRESH_SECS_MAX)
    })
}

pub(crate) fn persist_refresh_secs(secs: u32) {
    set_storage(REFRESH_SECS_KEY, secs);
}

/// Build-time base address; empty selects dev-proxy relative addressing.
pub(crate) fn api_base() -> ApiBase {
    ApiBase::new(option_env!("REELFORGE_API_BASE").unwrap_or_default())
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
