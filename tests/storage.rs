#![cfg(target_arch = "wasm32")]

use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen_test::*;

use scholarside::error::StoreError;
use scholarside::storage::{self, STORAGE_API_KEY, STORAGE_ONBOARDING};
use scholarside::types::{OnboardingProfile, Theme};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn api_key_round_trip_is_trimmed() {
    LocalStorage::clear();
    assert_eq!(storage::load_api_key(), None);

    let saved = storage::save_api_key("  AIza-test-key  ").unwrap();
    assert_eq!(saved, "AIza-test-key");
    assert_eq!(storage::load_api_key().as_deref(), Some("AIza-test-key"));
    assert_eq!(
        LocalStorage::raw().get_item(STORAGE_API_KEY).unwrap().as_deref(),
        Some("AIza-test-key")
    );

    storage::clear_api_key();
    assert_eq!(storage::load_api_key(), None);
}

#[wasm_bindgen_test]
fn unencoded_api_key_is_read() {
    LocalStorage::clear();
    LocalStorage::raw()
        .set_item(STORAGE_API_KEY, "AIzaSyExampleKey123")
        .unwrap();
    assert_eq!(storage::load_api_key().as_deref(), Some("AIzaSyExampleKey123"));
}

#[wasm_bindgen_test]
fn any_onboarding_value_counts_as_done() {
    LocalStorage::clear();
    LocalStorage::raw().set_item(STORAGE_ONBOARDING, "yes").unwrap();
    assert!(storage::has_completed_onboarding());
    assert_eq!(storage::load_onboarding(), None);
}

#[wasm_bindgen_test]
fn blank_api_key_is_rejected() {
    LocalStorage::clear();
    assert!(matches!(storage::save_api_key("   "), Err(StoreError::EmptyValue)));
    assert!(LocalStorage::raw().get_item(STORAGE_API_KEY).unwrap().is_none());
}

#[wasm_bindgen_test]
fn onboarding_marker_follows_saved_profile() {
    LocalStorage::clear();
    assert!(!storage::has_completed_onboarding());

    let profile = OnboardingProfile {
        name: "Sam".to_string(),
        school_level: "College".to_string(),
        subjects: vec!["Biology".to_string()],
        study_goals: vec!["Improve Grades".to_string()],
    };
    storage::save_onboarding(&profile).unwrap();

    assert!(storage::has_completed_onboarding());
    assert_eq!(storage::load_onboarding(), Some(profile));

    let raw = LocalStorage::raw().get_item(STORAGE_ONBOARDING).unwrap().unwrap();
    assert!(raw.contains("\"schoolLevel\":\"College\""));
    assert!(raw.contains("\"studyGoals\""));
}

#[wasm_bindgen_test]
fn theme_defaults_to_light_and_persists() {
    LocalStorage::clear();
    assert_eq!(storage::load_theme(), Theme::Light);

    storage::save_theme(Theme::Dark).unwrap();
    assert_eq!(storage::load_theme(), Theme::Dark);
}
