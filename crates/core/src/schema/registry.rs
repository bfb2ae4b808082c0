//! Registry of every schema known to the application.
//!
//! Lets callers that only have a name at runtime (a collection name from the
//! storage layer, a schema name on the command line) validate records without
//! naming the concrete type.

use core::fmt;
use core::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use super::{FieldSpec, RawFields, Schema, ValidationError};
use crate::models::{CoffeeItem, ContactMessage, Product, User};

/// One of the registered schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// [`User`]
    User,
    /// [`Product`]
    Product,
    /// [`CoffeeItem`]
    CoffeeItem,
    /// [`ContactMessage`]
    ContactMessage,
}

/// Error returned when a name matches no registered schema.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown schema: {0}")]
pub struct UnknownSchema(pub String);

impl SchemaKind {
    /// Every registered schema, in declaration order.
    pub const ALL: [Self; 4] = [Self::User, Self::Product, Self::CoffeeItem, Self::ContactMessage];

    /// Type name of the schema.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => User::NAME,
            Self::Product => Product::NAME,
            Self::CoffeeItem => CoffeeItem::NAME,
            Self::ContactMessage => ContactMessage::NAME,
        }
    }

    /// One-line description of the schema.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::User => User::DESCRIPTION,
            Self::Product => Product::DESCRIPTION,
            Self::CoffeeItem => CoffeeItem::DESCRIPTION,
            Self::ContactMessage => ContactMessage::DESCRIPTION,
        }
    }

    /// Fields of the schema, in declaration order.
    #[must_use]
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::User => User::FIELDS,
            Self::Product => Product::FIELDS,
            Self::CoffeeItem => CoffeeItem::FIELDS,
            Self::ContactMessage => ContactMessage::FIELDS,
        }
    }

    /// Collection the storage layer keeps these records in.
    #[must_use]
    pub fn collection(self) -> String {
        super::collection_name(self.name())
    }

    /// JSON Schema document for this schema.
    #[must_use]
    pub fn json_schema(self) -> Value {
        match self {
            Self::User => User::json_schema(),
            Self::Product => Product::json_schema(),
            Self::CoffeeItem => CoffeeItem::json_schema(),
            Self::ContactMessage => ContactMessage::json_schema(),
        }
    }

    /// Find a schema by type name or collection name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSchema`] if nothing matches.
    pub fn lookup(name: &str) -> Result<Self, UnknownSchema> {
        let wanted = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.collection() == wanted)
            .ok_or_else(|| UnknownSchema(name.to_owned()))
    }

    /// Validate `raw` against this schema.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every field that failed.
    pub fn construct(self, raw: &RawFields) -> Result<Record, ValidationError> {
        Ok(match self {
            Self::User => Record::User(User::construct(raw)?),
            Self::Product => Record::Product(Product::construct(raw)?),
            Self::CoffeeItem => Record::CoffeeItem(CoffeeItem::construct(raw)?),
            Self::ContactMessage => Record::ContactMessage(ContactMessage::construct(raw)?),
        })
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemaKind {
    type Err = UnknownSchema;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

/// A validated record of any registered schema.
///
/// Serializes as the inner record's plain field object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    /// A [`User`].
    User(User),
    /// A [`Product`].
    Product(Product),
    /// A [`CoffeeItem`].
    CoffeeItem(CoffeeItem),
    /// A [`ContactMessage`].
    ContactMessage(ContactMessage),
}

impl Record {
    /// Which schema the record belongs to.
    #[must_use]
    pub const fn kind(&self) -> SchemaKind {
        match self {
            Self::User(_) => SchemaKind::User,
            Self::Product(_) => SchemaKind::Product,
            Self::CoffeeItem(_) => SchemaKind::CoffeeItem,
            Self::ContactMessage(_) => SchemaKind::ContactMessage,
        }
    }

    /// Collection the record belongs in.
    #[must_use]
    pub fn collection(&self) -> String {
        self.kind().collection()
    }
}
