//! Value Objects module
//!
//! Immutable, validated domain primitives.

pub mod catalog_size;
pub mod email;
pub mod phone;

pub use catalog_size::{CatalogSize, CatalogSizeError};
pub use email::{Email, EmailError};
pub use phone::{PhoneNumber, PhoneError, GERMAN_PHONE_PATTERN};
