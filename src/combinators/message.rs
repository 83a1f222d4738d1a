//! MESSAGE combinator - custom error messages
//!
//! Every validator ships a default message ("Required", "Invalid email
//! format", ...). [`WithMessage`] replaces that message verbatim while
//! keeping the failing validator's error code and params, so programmatic
//! handling keeps working after the text changes.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let validator = number().with_message("Gotta be a number, fool");
///
/// let err = validator.validate(Some("1 hundred")).unwrap_err();
/// assert_eq!(err.message, "Gotta be a number, fool");
/// assert_eq!(err.code, "number");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub const fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for WithMessage<V> {
    fn validate(&self, value: Option<&str>) -> Result<(), ValidationError> {
        self.inner.validate(value).map_err(|mut err| {
            err.message = self.message.clone();
            err
        })
    }
}

/// Creates a `WithMessage` combinator.
///
/// Equivalent to
/// [`ValidateExt::with_message`](crate::foundation::ValidateExt::with_message).
pub fn with_message<V: Validate>(
    validator: V,
    message: impl Into<Cow<'static, str>>,
) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
