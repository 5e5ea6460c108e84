//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::is_valid_age;
use crate::error::{DomainError, DomainResult};

/// User domain entity.
///
/// Every `User` handed to callers satisfies all field rules; construction
/// and update validate before the value becomes visible, so no partially
/// valid record can escape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    /// Stable unique identifier, assigned by the store at creation
    pub id: Uuid,
    /// Display name, non-empty after trimming
    #[validate(custom(function = validate_name))]
    pub name: String,
    /// Email address (minimal format check: must contain '@')
    #[validate(custom(function = validate_email))]
    pub email: String,
    /// Age in years, 0 through 150 inclusive
    #[validate(custom(function = validate_age))]
    pub age: i32,
    /// Whether the account is active
    pub active: bool,
}

impl User {
    /// Build a user with the given identity, validating every field.
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
        active: bool,
    ) -> DomainResult<Self> {
        let user = Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
            active,
        };
        user.check()?;
        Ok(user)
    }

    /// Re-run field validation on the current record.
    pub fn check(&self) -> DomainResult<()> {
        self.validate()
            .map_err(|e| DomainError::validation(format_validation_errors(&e)))
    }

    /// Produce a validated copy with the supplied fields replaced.
    ///
    /// The id never changes. Validation runs on the merged candidate, so a
    /// failing update leaves `self` (and anything storing it) untouched.
    pub fn apply(&self, update: UserUpdate) -> DomainResult<User> {
        let candidate = User {
            id: self.id,
            name: update.name.unwrap_or_else(|| self.name.clone()),
            email: update.email.unwrap_or_else(|| self.email.clone()),
            age: update.age.unwrap_or(self.age),
            active: update.active.unwrap_or(self.active),
        };
        candidate.check()?;
        Ok(candidate)
    }
}

/// User creation payload.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Age in years
    pub age: i32,
    /// Active flag, true unless stated otherwise
    #[serde(default = "default_active")]
    pub active: bool,
}

impl NewUser {
    /// Creation payload with the default active flag.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
            active: true,
        }
    }

    /// Override the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

fn default_active() -> bool {
    true
}

/// User update payload.
///
/// `None` means "leave the stored value unchanged". There is no way to
/// express clearing a field, which keeps "not supplied" distinct from
/// "explicitly set to empty/zero".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    /// New display name
    pub name: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New age
    pub age: Option<i32>,
    /// New active flag
    pub active: Option<bool>,
}

impl UserUpdate {
    /// Empty patch; every field left unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name field.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email field.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the age field.
    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the active flag.
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none() && self.active.is_none()
    }
}

/// Custom validator for the name field
fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("empty_name");
        error.message = Some("Name cannot be empty".into());
        return Err(error);
    }
    Ok(())
}

/// Custom validator for the email field
fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !email.contains('@') {
        let mut error = ValidationError::new("invalid_email");
        error.message = Some("Invalid email format".into());
        return Err(error);
    }
    Ok(())
}

/// Custom validator for the age field
fn validate_age(age: i32) -> Result<(), ValidationError> {
    if !is_valid_age(age) {
        let mut error = ValidationError::new("age_out_of_range");
        error.message = Some("Age must be between 0 and 150".into());
        return Err(error);
    }
    Ok(())
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
