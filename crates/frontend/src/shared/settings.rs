//! List view settings stored as JSON in localStorage.
//!
//! Every field has a default, so a partial JSON object only overrides what it
//! names. A missing key yields the defaults.

use crate::shared::list_utils::SortDirection;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PACKS_LIST_SETTINGS_KEY: &str = "packs_list_settings";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("localStorage is not available")]
    StorageUnavailable,
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacksListSettings {
    pub default_sort_header: String,
    pub default_sort_direction: SortDirection,
    pub input_placeholder: String,
    pub search_debounce_ms: u32,
}

impl Default for PacksListSettings {
    fn default() -> Self {
        Self {
            default_sort_header: "name".to_string(),
            default_sort_direction: SortDirection::Desc,
            input_placeholder: "Search by name".to_string(),
            search_debounce_ms: 300,
        }
    }
}

pub fn parse_settings(json: &str) -> Result<PacksListSettings, SettingsError> {
    Ok(serde_json::from_str(json)?)
}

/// Read settings from localStorage
pub fn load_settings() -> Result<PacksListSettings, SettingsError> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(SettingsError::StorageUnavailable)?;

    match storage.get_item(PACKS_LIST_SETTINGS_KEY).ok().flatten() {
        Some(json) => parse_settings(&json),
        None => Ok(PacksListSettings::default()),
    }
}

/// Settings for the packs list, falling back to defaults on any error
pub fn load_settings_or_default() -> PacksListSettings {
    load_settings().unwrap_or_else(|e| {
        log::warn!("Using default packs list settings: {}", e);
        PacksListSettings::default()
    })
}
