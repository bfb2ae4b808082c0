//! Roastery Core - Record schemas for the coffee-shop site.
//!
//! This crate defines the shape of every record the site persists and the
//! validation each record passes before it is stored:
//! - [`User`] and [`Product`] - general-purpose example schemas
//! - [`CoffeeItem`] - drinks and pastries on the menu
//! - [`ContactMessage`] - submissions from the contact form
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no database
//! access. The storage layer derives a collection name from each schema
//! (the lowercased type name) and hands raw field mappings to
//! [`Schema::construct`], which returns a valid instance or a
//! [`ValidationError`] listing every failed field.
//!
//! # Modules
//!
//! - [`types`] - Validated value types for emails, prices, ages and messages
//! - [`schema`] - The [`Schema`] trait, field metadata, coercion and the registry
//! - [`models`] - The four record schemas
//!
//! # Example
//!
//! ```
//! use roastery_core::{CoffeeItem, Schema};
//! use serde_json::json;
//!
//! let raw = json!({ "name": "Cortado", "price": "3.40", "tags": ["hot"] });
//! let item = CoffeeItem::construct(raw.as_object().unwrap()).unwrap();
//!
//! assert_eq!(item.category, "coffee");
//! assert_eq!(CoffeeItem::collection_name(), "coffeeitem");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod schema;
pub mod types;

pub use models::*;
pub use schema::{
    FieldError, FieldErrorKind, FieldSpec, RawFields, Record, Schema, SchemaKind, UnknownSchema,
    ValidationError, collection_name,
};
pub use types::*;
