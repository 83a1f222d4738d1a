//! Numeric coercibility validator
//!
//! [`Number`] checks that a field's text parses to a finite number. The
//! field stays a string; this validator only answers "could a form layer
//! coerce this to a number?".

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a field value parses to a finite `f64`.
    ///
    /// Leading and trailing ASCII whitespace is ignored. Integer, float,
    /// signed, and exponent forms are accepted; `NaN`, infinities, and
    /// absent or empty values are rejected. See the `numeric_forms`
    /// integration test for the pinned accepted/rejected forms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck::prelude::*;
    ///
    /// assert!(number().validate(Some("123")).is_ok());
    /// assert!(number().validate(Some("1 hundred")).is_err());
    /// ```
    pub Number;
    rule(value) {
        value
            .unwrap_or_default()
            .trim()
            .parse::<f64>()
            .is_ok_and(f64::is_finite)
    }
    error(value) { ValidationError::new("number", "Must be a number") }
    fn number();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_accepts_numbers() {
        let validator = number();
        assert!(validator.validate(Some("123")).is_ok());
        assert!(validator.validate(Some("-4.5")).is_ok());
        assert!(validator.validate(Some("1e3")).is_ok());
        assert!(validator.validate(Some(" 42 ")).is_ok());
    }

    #[test]
    fn test_rejects_non_numbers() {
        let validator = number();
        assert!(validator.validate(Some("1 hundred")).is_err());
        assert!(validator.validate(Some("")).is_err());
        assert!(validator.validate(None).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let validator = number();
        assert!(validator.validate(Some("NaN")).is_err());
        assert!(validator.validate(Some("inf")).is_err());
        assert!(validator.validate(Some("-inf")).is_err());
    }

    #[test]
    fn test_default_message() {
        let err = number().validate(Some("1 hundred")).unwrap_err();
        assert_eq!(err.code, "number");
        assert_eq!(err.message, "Must be a number");
    }
}
