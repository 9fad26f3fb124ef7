//! Tests for configuration file handling
//!
//! These tests verify:
//! - Save/load round-trips through a real file
//! - Missing fields fall back to defaults
//! - Validation bounds
//! - Unknown enum values are load errors

use std::fs;
use tempfile::tempdir;
use uxshowcase::config::ShowcaseConfig;
use uxshowcase::error::ShowcaseError;
use uxshowcase::types::{EmailValidation, Screen};

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("showcase.json");
    let config = ShowcaseConfig {
        start_screen: Screen::Menu,
        email_validation: EmailValidation::Strict,
        min_password_length: 8,
        price_step: 20,
    };
    config.save_to_file(&path).unwrap();
    assert_eq!(ShowcaseConfig::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_empty_object_is_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "{}").unwrap();
    let config = ShowcaseConfig::load_from_file(&path).unwrap();
    assert_eq!(config, ShowcaseConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{ "start_screen": "shop" }"#).unwrap();
    let config = ShowcaseConfig::load_from_file(&path).unwrap();
    assert_eq!(config.start_screen, Screen::Shop);
    assert_eq!(config.min_password_length, 6);
    assert_eq!(config.price_step, 50);
}

#[test]
fn test_unknown_screen_fails_to_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "start_screen": "checkout" }"#).unwrap();
    let err = ShowcaseConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("parse"));
}

#[test]
fn test_missing_file_error_names_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = ShowcaseConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_validation_bounds() {
    let zero_password = ShowcaseConfig {
        min_password_length: 0,
        ..ShowcaseConfig::default()
    };
    assert!(zero_password.validate().is_err());

    let zero_step = ShowcaseConfig {
        price_step: 0,
        ..ShowcaseConfig::default()
    };
    assert!(zero_step.validate().is_err());
}

#[test]
fn test_validation_failure_is_config_error() {
    let config = ShowcaseConfig {
        min_password_length: 500,
        ..ShowcaseConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ShowcaseError::Config(_)));
    assert!(err.to_string().contains("min_password_length"));
}
