//! Membership validator
//!
//! [`OneOf`] checks a field value against a fixed, ordered list of allowed
//! strings. Matching is exact and case-sensitive.

use crate::foundation::{Validate, ValidationError};

/// Validates that a field value is exactly one of a fixed set of options.
///
/// The default failure message lists the options joined with "or":
/// `"Must be admin or super admin"` for two options,
/// `"Must be admin, super admin, or mega admin"` for three or more, and
/// `"Must be admin"` for a single option. The message is built once at
/// construction time.
///
/// An empty options list is a construction error, not a validator that can
/// never pass.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let validator = one_of(["admin", "super admin"]).unwrap();
/// assert!(validator.validate(Some("admin")).is_ok());
///
/// let err = validator.validate(Some("not an admin")).unwrap_err();
/// assert_eq!(err.message, "Must be admin or super admin");
/// ```
#[derive(Debug, Clone)]
pub struct OneOf {
    options: Vec<String>,
    message: String,
}

impl OneOf {
    /// Creates a `OneOf` validator from an ordered, non-empty options list.
    ///
    /// # Errors
    ///
    /// Returns an error when `options` is empty.
    pub fn new<I, S>(options: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(ValidationError::new(
                "empty_options",
                "OneOf requires at least one option",
            ));
        }
        let message = format!("Must be {}", join_with_or(&options));
        Ok(Self { options, message })
    }

    /// Returns the allowed options, in construction order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl Validate for OneOf {
    fn validate(&self, value: Option<&str>) -> Result<(), ValidationError> {
        let v = value.unwrap_or_default();
        if self.options.iter().any(|option| option == v) {
            Ok(())
        } else {
            Err(ValidationError::new("one_of", self.message.clone())
                .with_param("options", self.options.join(", ")))
        }
    }
}

/// Creates a [`OneOf`] validator.
///
/// # Errors
///
/// Returns an error when `options` is empty.
pub fn one_of<I, S>(options: I) -> Result<OneOf, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOf::new(options)
}

// "a" / "a or b" / "a, b, or c"
fn join_with_or(options: &[String]) -> String {
    match options {
        [] => String::new(),
        [single] => single.clone(),
        [first, last] => format!("{first} or {last}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}
