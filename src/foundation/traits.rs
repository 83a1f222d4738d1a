//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use std::borrow::Cow;

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator is a pure function of a single field value. The value is an
/// `Option<&str>`: `None` models a field that was never supplied, `Some(s)`
/// a present string (which may be empty). Validators hold no mutable state,
/// so a constructed validator is safe to reuse across calls and to share
/// across threads.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::{Validate, ValidationError};
///
/// struct Lowercase;
///
/// impl Validate for Lowercase {
///     fn validate(&self, value: Option<&str>) -> Result<(), ValidationError> {
///         let s = value.unwrap_or_default();
///         if s.chars().all(|c| !c.is_alphabetic() || c.is_lowercase()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("lowercase", "Must be lowercase"))
///         }
///     }
/// }
///
/// assert!(Lowercase.validate(Some("hello")).is_ok());
/// assert!(Lowercase.validate(Some("Hello")).is_err());
/// ```
pub trait Validate {
    /// Validates a field value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, value: Option<&str>) -> Result<(), ValidationError>;
}

/// A heap-allocated, thread-safe validator, as stored by
/// [`Chain`](crate::combinators::Chain).
pub type BoxedValidator = Box<dyn Validate + Send + Sync>;

impl<V: Validate + ?Sized> Validate for &V {
    fn validate(&self, value: Option<&str>) -> Result<(), ValidationError> {
        (**self).validate(value)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, value: Option<&str>) -> Result<(), ValidationError> {
        (**self).validate(value)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement [`Validate`],
/// providing a fluent API for composing validators.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let validator = required().and(email());
/// assert!(validator.validate(Some("a@b.c")).is_ok());
/// assert!(validator.validate(None).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass for the combined validator to succeed.
    /// Short-circuits on the first failure.
    fn and<V: Validate>(self, other: V) -> And<Self, V> {
        And::new(self, other)
    }

    /// Replaces the failure message with a custom one, verbatim.
    ///
    /// The error code of the failing validator is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck::prelude::*;
    ///
    /// let v = required().with_message("Name is required");
    /// let err = v.validate(None).unwrap_err();
    /// assert_eq!(err.message, "Name is required");
    /// assert_eq!(err.code, "required");
    /// ```
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Boxes the validator for storage in a [`Chain`](crate::combinators::Chain).
    fn boxed(self) -> BoxedValidator
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;

// ============================================================================
// TESTS
// ============================================================================
