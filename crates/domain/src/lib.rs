//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no storage dependencies.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{NewUser, User, UserUpdate};
