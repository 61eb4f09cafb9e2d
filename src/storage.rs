//! Local storage access. The API key is kept as a raw string so other
//! clients of the same origin can read it; everything else is JSON.

use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::errors::JsError;
use wasm_bindgen::JsCast;

use crate::error::StoreError;
use crate::types::{OnboardingProfile, Theme};

pub const STORAGE_ONBOARDING: &str = "scholarside-onboarding";
pub const STORAGE_API_KEY: &str = "gemini-api-key";
pub const STORAGE_THEME: &str = "scholarside-theme";

/// The onboarding marker is the presence of the key, whatever its value.
pub fn has_completed_onboarding() -> bool {
    raw_item(STORAGE_ONBOARDING).is_some()
}

pub fn save_onboarding(profile: &OnboardingProfile) -> Result<(), StoreError> {
    LocalStorage::set(STORAGE_ONBOARDING, profile)?;
    Ok(())
}

pub fn load_onboarding() -> Option<OnboardingProfile> {
    LocalStorage::get(STORAGE_ONBOARDING).ok()
}

pub fn load_api_key() -> Option<String> {
    raw_item(STORAGE_API_KEY).and_then(|key| normalize_api_key(&key))
}

/// Stores the trimmed key, unencoded, and returns it.
pub fn save_api_key(key: &str) -> Result<String, StoreError> {
    let key = normalize_api_key(key).ok_or(StoreError::EmptyValue)?;
    LocalStorage::raw()
        .set_item(STORAGE_API_KEY, &key)
        .map_err(|e| StorageError::JsError(JsError::from(e.unchecked_into::<js_sys::Error>())))?;
    Ok(key)
}

pub fn clear_api_key() {
    LocalStorage::delete(STORAGE_API_KEY);
}

pub fn load_theme() -> Theme {
    LocalStorage::get(STORAGE_THEME).unwrap_or_default()
}

pub fn save_theme(theme: Theme) -> Result<(), StoreError> {
    LocalStorage::set(STORAGE_THEME, theme)?;
    Ok(())
}

fn raw_item(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

pub fn normalize_api_key(key: &str) -> Option<String> {
    let key = key.trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_api_key() {
        assert_eq!(normalize_api_key("  abc123 "), Some("abc123".to_string()));
        assert_eq!(normalize_api_key("   "), None);
        assert_eq!(normalize_api_key(""), None);
    }
}
