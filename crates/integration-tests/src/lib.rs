//! Integration tests for Roastery.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p roastery-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `schemas` - Construction, defaults and constraint checks per schema
//! - `registry` - Runtime lookup, collection names, JSON Schema export and
//!   records read back from stored JSON

use roastery_core::RawFields;
use serde_json::Value;

/// Unwrap a JSON object literal into a raw record.
///
/// # Panics
///
/// Panics if `value` is not an object.
#[must_use]
pub fn raw(value: Value) -> RawFields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Copy of `base` with `field` set to `value`.
#[must_use]
pub fn with(base: &RawFields, field: &str, value: Value) -> RawFields {
    let mut out = base.clone();
    out.insert(field.to_owned(), value);
    out
}

/// Copy of `base` without `field`.
#[must_use]
pub fn without(base: &RawFields, field: &str) -> RawFields {
    let mut out = base.clone();
    out.remove(field);
    out
}
