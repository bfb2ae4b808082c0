//! Record schemas and their validation contract.
//!
//! Every record type implements [`Schema`]: a type name, an ordered field
//! list, and a `construct` function that turns a raw field mapping into a
//! fully validated instance or a [`ValidationError`].

pub mod error;
pub mod field;
pub mod json_schema;
pub mod raw;
pub mod registry;

use serde::Serialize;
use serde_json::Value;

pub use error::{FieldError, FieldErrorKind, ValidationError};
pub use field::{Constraint, DefaultValue, FieldSpec, FieldType};
pub use raw::{FieldReader, FieldValue, RawFields};
pub use registry::{Record, SchemaKind, UnknownSchema};

/// Collection identifier for a schema type name.
///
/// Lowercasing only: `CoffeeItem` becomes `coffeeitem`, with no word
/// splitting or pluralization.
///
/// ```
/// assert_eq!(roastery_core::collection_name("User"), "user");
/// assert_eq!(roastery_core::collection_name("CoffeeItem"), "coffeeitem");
/// ```
#[must_use]
pub fn collection_name(type_name: &str) -> String {
    type_name.to_lowercase()
}

/// A named, fixed set of typed, constrained fields describing one record kind.
pub trait Schema: Sized + Serialize {
    /// Type name, e.g. `"ContactMessage"`.
    const NAME: &'static str;

    /// One-line description of what the records hold.
    const DESCRIPTION: &'static str;

    /// Fields in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Validate `raw` and build an instance.
    ///
    /// Checks required fields are present, coerces values to their declared
    /// types, applies every constraint and fills defaults for omitted
    /// optional fields. Fields not declared by the schema are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every field that failed.
    fn construct(raw: &RawFields) -> Result<Self, ValidationError>;

    /// Collection the storage layer keeps these records in.
    #[must_use]
    fn collection_name() -> String {
        collection_name(Self::NAME)
    }

    /// Metadata for the field called `name`.
    #[must_use]
    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|f| f.name == name)
    }

    /// JSON Schema document describing this record type.
    #[must_use]
    fn json_schema() -> Value {
        json_schema::document(Self::NAME, Self::DESCRIPTION, Self::FIELDS)
    }
}
