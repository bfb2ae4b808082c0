//! Validated value types.
//!
//! Each type enforces one field constraint at construction time, so a value
//! that exists is a value that passed validation.

pub mod age;
pub mod email;
pub mod message;
pub mod price;

pub use age::{Age, AgeError};
pub use email::{Email, EmailError};
pub use message::{MessageBody, MessageBodyError};
pub use price::{Price, PriceError};
