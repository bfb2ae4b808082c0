//! Products collection.

use serde::{Deserialize, Serialize};

use crate::schema::{
    Constraint, DefaultValue, FieldReader, FieldSpec, FieldType, RawFields, Schema,
    ValidationError,
};
use crate::types::Price;

/// A catalogue product. Stored in the `product` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFields")]
pub struct Product {
    /// Product title.
    pub title: String,
    /// Product description.
    pub description: Option<String>,
    /// Price in dollars.
    pub price: Price,
    /// Product category.
    pub category: String,
    /// Whether the product is in stock.
    pub in_stock: bool,
}

impl Schema for Product {
    const NAME: &'static str = "Product";
    const DESCRIPTION: &'static str = "Products collection schema";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldType::Text, "Product title"),
        FieldSpec::optional(
            "description",
            FieldType::Text,
            DefaultValue::Null,
            "Product description",
        ),
        FieldSpec::required("price", FieldType::Decimal, "Price in dollars")
            .constrained(Constraint::NonNegative),
        FieldSpec::required("category", FieldType::Text, "Product category"),
        FieldSpec::optional(
            "in_stock",
            FieldType::Boolean,
            DefaultValue::Bool(true),
            "Whether product is in stock",
        ),
    ];

    fn construct(raw: &RawFields) -> Result<Self, ValidationError> {
        let mut reader = FieldReader::new(Self::NAME, raw);
        let title = reader.required("title");
        let description = reader.optional("description");
        let price = reader.required("price");
        let category = reader.required("category");
        let in_stock = reader.or_default("in_stock", true);

        match (title, price, category, in_stock) {
            (Some(title), Some(price), Some(category), Some(in_stock)) if reader.is_clean() => {
                Ok(Self {
                    title,
                    description,
                    price,
                    category,
                    in_stock,
                })
            }
            _ => Err(reader.into_error()),
        }
    }
}

impl TryFrom<RawFields> for Product {
    type Error = ValidationError;

    fn try_from(raw: RawFields) -> Result<Self, Self::Error> {
        Self::construct(&raw)
    }
}
