//! The record schemas.
//!
//! `User` and `Product` are general-purpose examples; `CoffeeItem` and
//! `ContactMessage` back the coffee-shop site.

pub mod coffee_item;
pub mod contact_message;
pub mod product;
pub mod user;

pub use coffee_item::CoffeeItem;
pub use contact_message::ContactMessage;
pub use product::Product;
pub use user::User;
