//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator which combines two validators
//! with logical AND semantics: both validators must pass for the combined
//! validator to succeed.
//!
//! Unlike [`Chain`](crate::combinators::Chain), `And` dispatches statically
//! and allocates nothing; use it when the rule pair is known at compile time.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Errors are returned from the first failing validator; the right validator
/// is not invoked when the left one fails.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let validator = required().and(number());
/// assert!(validator.validate(Some("42")).is_ok());
/// assert!(validator.validate(None).is_err()); // fails required
/// assert!(validator.validate(Some("forty-two")).is_err()); // fails number
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub const fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, value: Option<&str>) -> Result<(), ValidationError> {
        self.left.validate(value)?;
        self.right.validate(value)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
///
/// Equivalent to [`ValidateExt::and`](crate::foundation::ValidateExt::and).
pub fn and<L: Validate, R: Validate>(left: L, right: R) -> And<L, R> {
    And::new(left, right)
}
