//! Presence validator
//!
//! [`Required`] rejects fields that were never supplied (`None`) and fields
//! supplied as the empty string. Everything else passes, including
//! whitespace-only strings, `"0"`, and `"false"`: presence is about the
//! field having *a* value, not a sensible one.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a field value is present and non-empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck::prelude::*;
    ///
    /// assert!(required().validate(Some("0")).is_ok());
    /// assert!(required().validate(Some("")).is_err());
    /// assert!(required().validate(None).is_err());
    /// ```
    pub Required;
    rule(value) { value.is_some_and(|s| !s.is_empty()) }
    error(value) { ValidationError::new("required", "Required") }
    fn required();
}
