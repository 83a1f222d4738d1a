//! String content validators
//!
//! Validators for checking the shape of a field's text.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// Permissive on purpose: anything@anything.anything, not RFC 5322.
static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r".*@.*\..*").unwrap());

crate::validator! {
    /// Validates email shape: an `@` followed somewhere by a `.`.
    ///
    /// An absent value is treated as the empty string and rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck::prelude::*;
    ///
    /// assert!(email().validate(Some("a_valid_email@example.com")).is_ok());
    /// assert!(email().validate(Some("not_a_valid_email")).is_err());
    /// ```
    pub Email { pattern: regex::Regex };
    rule(self, value) { self.pattern.is_match(value.unwrap_or_default()) }
    error(self, value) { ValidationError::new("email", "Invalid email format") }
    new() { Self { pattern: EMAIL_REGEX.clone() } }
    fn email();
}
