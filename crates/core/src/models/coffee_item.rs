//! Coffee menu items.

use serde::{Deserialize, Serialize};

use crate::schema::{
    Constraint, DefaultValue, FieldReader, FieldSpec, FieldType, RawFields, Schema,
    ValidationError,
};
use crate::types::Price;

/// A drink or pastry on the menu. Stored in the `coffeeitem` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFields")]
pub struct CoffeeItem {
    /// Drink or pastry name.
    pub name: String,
    /// Short description of the item.
    pub description: Option<String>,
    /// Price in local currency.
    pub price: Price,
    /// Category like coffee, tea, pastry, seasonal.
    pub category: String,
    /// Tags like hot, iced, vegan, new.
    pub tags: Option<Vec<String>>,
    /// Whether the item is currently available.
    pub available: bool,
}

impl CoffeeItem {
    /// Category applied when none is given.
    pub const DEFAULT_CATEGORY: &'static str = "coffee";

    /// Whether the item carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

impl Schema for CoffeeItem {
    const NAME: &'static str = "CoffeeItem";
    const DESCRIPTION: &'static str = "Coffee menu items";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldType::Text, "Drink or pastry name"),
        FieldSpec::optional(
            "description",
            FieldType::Text,
            DefaultValue::Null,
            "Short description of the item",
        ),
        FieldSpec::required("price", FieldType::Decimal, "Price in local currency")
            .constrained(Constraint::NonNegative),
        FieldSpec::optional(
            "category",
            FieldType::Text,
            DefaultValue::Text(Self::DEFAULT_CATEGORY),
            "Category like coffee, tea, pastry, seasonal",
        ),
        FieldSpec::optional(
            "tags",
            FieldType::TextList,
            DefaultValue::Null,
            "Tags like hot, iced, vegan, new",
        ),
        FieldSpec::optional(
            "available",
            FieldType::Boolean,
            DefaultValue::Bool(true),
            "Whether currently available",
        ),
    ];

    fn construct(raw: &RawFields) -> Result<Self, ValidationError> {
        let mut reader = FieldReader::new(Self::NAME, raw);
        let name = reader.required("name");
        let description = reader.optional("description");
        let price = reader.required("price");
        let category = reader.or_default("category", Self::DEFAULT_CATEGORY.to_owned());
        let tags = reader.optional("tags");
        let available = reader.or_default("available", true);

        match (name, price, category, available) {
            (Some(name), Some(price), Some(category), Some(available)) if reader.is_clean() => {
                Ok(Self {
                    name,
                    description,
                    price,
                    category,
                    tags,
                    available,
                })
            }
            _ => Err(reader.into_error()),
        }
    }
}

impl TryFrom<RawFields> for CoffeeItem {
    type Error = ValidationError;

    fn try_from(raw: RawFields) -> Result<Self, Self::Error> {
        Self::construct(&raw)
    }
}
