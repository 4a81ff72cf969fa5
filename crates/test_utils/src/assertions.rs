//! Custom Test Assertions
//!
//! Provides assertion helpers for serialized profiles and resolution errors
//! that give more meaningful failure messages than standard assertions.

use domain_party::{DerivedPartyProfile, PartyDetailsError};
use serde_json::Value;

/// Asserts that a serialized profile contains `key`
///
/// # Panics
///
/// Panics if the value is not an object or the key is missing
pub fn assert_has_key(profile: &Value, key: &str) {
    let object = profile.as_object().expect("profile serializes to an object");
    assert!(
        object.contains_key(key),
        "Expected key {:?} in profile, keys were {:?}",
        key,
        object.keys().collect::<Vec<_>>()
    );
}

/// Asserts that a serialized profile does not contain `key`
pub fn assert_no_key(profile: &Value, key: &str) {
    let object = profile.as_object().expect("profile serializes to an object");
    assert!(
        !object.contains_key(key),
        "Expected no key {:?} in profile, found value {}",
        key,
        object[key]
    );
}

/// Asserts that `key` holds the string `expected`
pub fn assert_key_str(profile: &Value, key: &str, expected: &str) {
    assert_has_key(profile, key);
    assert_eq!(
        profile[key].as_str(),
        Some(expected),
        "Unexpected value for key {:?}: {}",
        key,
        profile[key]
    );
}

/// Asserts that resolution was refused for lack of read permission
pub fn assert_permission_denied(result: Result<DerivedPartyProfile, PartyDetailsError>) {
    match result {
        Err(error) if error.is_permission_denied() => {}
        Err(error) => panic!("Expected a permission error, got {:?}", error),
        Ok(profile) => panic!("Expected a permission error, got a profile for {}", profile.party),
    }
}

/// Asserts that resolution failed validation
pub fn assert_validation_error(result: Result<DerivedPartyProfile, PartyDetailsError>) {
    match result {
        Err(error) if error.is_validation() => {}
        Err(error) => panic!("Expected a validation error, got {:?}", error),
        Ok(profile) => panic!("Expected a validation error, got a profile for {}", profile.party),
    }
}
