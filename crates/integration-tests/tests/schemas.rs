//! Construction and validation of every record schema.
//!
//! Run with: cargo test -p roastery-integration-tests --test schemas

#![allow(clippy::unwrap_used)]

use roastery_core::{
    CoffeeItem, ContactMessage, FieldErrorKind, Price, Product, RawFields, Schema, User,
};
use roastery_integration_tests::{raw, with, without};
use rust_decimal::Decimal;
use serde_json::json;

fn user() -> RawFields {
    raw(json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "address": "12 Analytical Row"
    }))
}

fn product() -> RawFields {
    raw(json!({
        "title": "Ethiopia Guji, 250g",
        "price": "14.50",
        "category": "beans"
    }))
}

fn coffee_item() -> RawFields {
    raw(json!({ "name": "Flat White", "price": 4.2 }))
}

fn contact_message() -> RawFields {
    raw(json!({
        "name": "Grace",
        "email": "grace@example.com",
        "message": "Do you roast decaf?"
    }))
}

// ============================================================================
// Valid input and defaults
// ============================================================================

#[test]
fn test_user_defaults() {
    let user = User::construct(&user()).unwrap();
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.address, "12 Analytical Row");
    assert_eq!(user.age, None);
    assert!(user.is_active);
}

#[test]
fn test_product_defaults() {
    let product = Product::construct(&product()).unwrap();
    assert_eq!(product.price.amount(), Decimal::new(1450, 2));
    assert_eq!(product.description, None);
    assert!(product.in_stock);
}

#[test]
fn test_coffee_item_defaults() {
    let item = CoffeeItem::construct(&coffee_item()).unwrap();
    assert_eq!(item.category, CoffeeItem::DEFAULT_CATEGORY);
    assert_eq!(item.tags, None);
    assert!(item.available);
    assert!(!item.has_tag("hot"));
}

#[test]
fn test_coffee_item_explicit_values_kept() {
    let input = raw(json!({
        "name": "Iced Oat Latte",
        "description": "Double shot over oat milk",
        "price": "5.00",
        "category": "seasonal",
        "tags": ["iced", "vegan"],
        "available": false
    }));
    let item = CoffeeItem::construct(&input).unwrap();
    assert_eq!(item.category, "seasonal");
    assert_eq!(item.description.as_deref(), Some("Double shot over oat milk"));
    assert!(item.has_tag("vegan"));
    assert!(!item.available);
}

#[test]
fn test_contact_message_subject_optional() {
    let message = ContactMessage::construct(&contact_message()).unwrap();
    assert_eq!(message.subject, None);
    assert_eq!(message.email.domain(), "example.com");

    let input = with(&contact_message(), "subject", json!("Wholesale"));
    let message = ContactMessage::construct(&input).unwrap();
    assert_eq!(message.subject.as_deref(), Some("Wholesale"));
}

#[test]
fn test_undeclared_fields_ignored() {
    let input = with(&user(), "favourite_bean", json!("Kenya AA"));
    assert!(User::construct(&input).is_ok());
}

// ============================================================================
// Required fields
// ============================================================================

#[test]
fn test_missing_required_field_named() {
    for field in ["name", "email", "address"] {
        let err = User::construct(&without(&user(), field)).unwrap_err();
        assert_eq!(err.for_field(field), Some(&FieldErrorKind::Missing));
        assert_eq!(err.errors().len(), 1);
    }

    let err = Product::construct(&without(&product(), "price")).unwrap_err();
    assert_eq!(err.for_field("price"), Some(&FieldErrorKind::Missing));
}

#[test]
fn test_null_required_field_is_type_error() {
    let err = CoffeeItem::construct(&with(&coffee_item(), "name", json!(null))).unwrap_err();
    assert_eq!(
        err.for_field("name"),
        Some(&FieldErrorKind::WrongType { expected: "text" })
    );
}

#[test]
fn test_null_optional_field_means_absent() {
    let input = with(&coffee_item(), "tags", json!(null));
    assert_eq!(CoffeeItem::construct(&input).unwrap().tags, None);

    let input = with(&user(), "age", json!(null));
    assert_eq!(User::construct(&input).unwrap().age, None);
}

#[test]
fn test_null_for_concrete_default_rejected() {
    let input = with(&user(), "is_active", json!(null));
    let err = User::construct(&input).unwrap_err();
    assert_eq!(
        err.for_field("is_active"),
        Some(&FieldErrorKind::WrongType { expected: "boolean" })
    );
}

#[test]
fn test_every_failure_reported() {
    let input = raw(json!({ "email": "nope", "message": "hi" }));
    let err = ContactMessage::construct(&input).unwrap_err();

    let fields: Vec<&str> = err.fields().collect();
    assert_eq!(fields, ["name", "email", "message"]);
    assert_eq!(err.schema(), "ContactMessage");
    assert!(err.to_string().starts_with("3 validation errors for ContactMessage"));
}

// ============================================================================
// Constraints
// ============================================================================

#[test]
fn test_user_age_bounds() {
    for age in [0, 120] {
        let user = User::construct(&with(&user(), "age", json!(age))).unwrap();
        assert_eq!(user.age.map(|a| i64::from(a.years())), Some(age));
    }

    for age in [-1, 121] {
        let err = User::construct(&with(&user(), "age", json!(age))).unwrap_err();
        assert_eq!(
            err.for_field("age"),
            Some(&FieldErrorKind::OutOfRange {
                min: 0,
                max: 120,
                actual: age
            })
        );
    }
}

#[test]
fn test_product_price_non_negative() {
    let free = Product::construct(&with(&product(), "price", json!(0))).unwrap();
    assert_eq!(free.price, Price::from_cents(0).unwrap());

    let err = Product::construct(&with(&product(), "price", json!(-0.01))).unwrap_err();
    assert_eq!(err.for_field("price"), Some(&FieldErrorKind::Negative));
}

#[test]
fn test_coffee_item_price_non_negative() {
    let err = CoffeeItem::construct(&with(&coffee_item(), "price", json!("-1"))).unwrap_err();
    assert_eq!(err.for_field("price"), Some(&FieldErrorKind::Negative));
}

#[test]
fn test_contact_message_email_syntax() {
    let ok = ContactMessage::construct(&with(&contact_message(), "email", json!("a@b.com")));
    assert!(ok.is_ok());

    for bad in [
        "not-an-email",
        "a@b",
        "a b@c.com",
        "@b.com",
        "a@@b.com",
        "a..b@example.com",
        ".a@example.com",
        "a.@example.com",
        "a@-example.com",
        "a<b>@example.com",
        "a,b@example.com",
        "a(b)@example.com",
        "a@exa_mple.com",
    ] {
        let err = ContactMessage::construct(&with(&contact_message(), "email", json!(bad)))
            .unwrap_err();
        assert!(
            matches!(err.for_field("email"), Some(FieldErrorKind::InvalidEmail(_))),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn test_user_email_not_format_checked() {
    let input = with(&user(), "email", json!("not-an-email"));
    assert_eq!(User::construct(&input).unwrap().email, "not-an-email");
}

#[test]
fn test_contact_message_length_bounds() {
    for len in [5, 2000] {
        let input = with(&contact_message(), "message", json!("x".repeat(len)));
        assert!(ContactMessage::construct(&input).is_ok(), "length {len}");
    }

    let input = with(&contact_message(), "message", json!("x".repeat(4)));
    let err = ContactMessage::construct(&input).unwrap_err();
    assert_eq!(
        err.for_field("message"),
        Some(&FieldErrorKind::TooShort { min: 5, actual: 4 })
    );

    let input = with(&contact_message(), "message", json!("x".repeat(2001)));
    let err = ContactMessage::construct(&input).unwrap_err();
    assert_eq!(
        err.for_field("message"),
        Some(&FieldErrorKind::TooLong {
            max: 2000,
            actual: 2001
        })
    );
}

#[test]
fn test_message_length_counts_characters() {
    let input = with(&contact_message(), "message", json!("café"));
    let err = ContactMessage::construct(&input).unwrap_err();
    assert_eq!(
        err.for_field("message"),
        Some(&FieldErrorKind::TooShort { min: 5, actual: 4 })
    );
}

// ============================================================================
// Coercion
// ============================================================================

#[test]
fn test_integer_coercion() {
    for value in [json!(30), json!(30.0), json!(" 30 ")] {
        let user = User::construct(&with(&user(), "age", value)).unwrap();
        assert_eq!(user.age.map(|a| a.years()), Some(30));
    }

    for value in [json!(30.5), json!("thirty"), json!(true)] {
        let err = User::construct(&with(&user(), "age", value)).unwrap_err();
        assert_eq!(
            err.for_field("age"),
            Some(&FieldErrorKind::WrongType { expected: "integer" })
        );
    }
}

#[test]
fn test_decimal_coercion() {
    for (value, expected) in [
        (json!(3), Decimal::new(3, 0)),
        (json!("4.50"), Decimal::new(450, 2)),
        (json!("1e2"), Decimal::new(100, 0)),
    ] {
        let item = CoffeeItem::construct(&with(&coffee_item(), "price", value)).unwrap();
        assert_eq!(item.price.amount(), expected);
    }

    let err = CoffeeItem::construct(&with(&coffee_item(), "price", json!(1e29))).unwrap_err();
    assert_eq!(err.for_field("price"), Some(&FieldErrorKind::DecimalOutOfRange));

    for value in [json!("cheap"), json!(false), json!([1])] {
        let err = CoffeeItem::construct(&with(&coffee_item(), "price", value)).unwrap_err();
        assert_eq!(
            err.for_field("price"),
            Some(&FieldErrorKind::WrongType { expected: "decimal" })
        );
    }
}

#[test]
fn test_boolean_coercion() {
    for (value, expected) in [
        (json!(false), false),
        (json!(1), true),
        (json!(0), false),
        (json!("Yes"), true),
        (json!("off"), false),
    ] {
        let item = CoffeeItem::construct(&with(&coffee_item(), "available", value)).unwrap();
        assert_eq!(item.available, expected);
    }

    for value in [json!(2), json!("maybe")] {
        let err = CoffeeItem::construct(&with(&coffee_item(), "available", value)).unwrap_err();
        assert_eq!(
            err.for_field("available"),
            Some(&FieldErrorKind::WrongType { expected: "boolean" })
        );
    }
}

#[test]
fn test_text_is_strict() {
    let err = Product::construct(&with(&product(), "category", json!(7))).unwrap_err();
    assert_eq!(
        err.for_field("category"),
        Some(&FieldErrorKind::WrongType { expected: "text" })
    );
}

#[test]
fn test_tag_items_must_be_text() {
    let input = with(&coffee_item(), "tags", json!(["hot", 3, "iced", null]));
    let err = CoffeeItem::construct(&input).unwrap_err();
    assert_eq!(
        err.for_field("tags"),
        Some(&FieldErrorKind::InvalidItems {
            indices: vec![1, 3],
            expected: "text"
        })
    );
    assert!(err.to_string().contains("tags: items 1, 3: expected text"));

    let input = with(&coffee_item(), "tags", json!("hot"));
    assert!(CoffeeItem::construct(&input).is_err());
}
