//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

/// Minimum accepted age for a user record
pub const MIN_AGE: i32 = 0;

/// Maximum accepted age for a user record
pub const MAX_AGE: i32 = 150;

/// Check if an age value is within the accepted range
pub fn is_valid_age(age: i32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}
