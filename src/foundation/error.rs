//! Error type for validation failures
//!
//! Failures are ordinary return values, never panics: a validator that
//! rejects its input returns a [`ValidationError`] carrying a machine-readable
//! code and a human-readable message.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt::Write as _;

use smallvec::SmallVec;

/// Ordered key/value pairs attached to an error (typically 0-2 params).
type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A structured validation error.
///
/// The `code` identifies the failing rule for programmatic handling; the
/// `message` is the default English text a form layer displays next to the
/// field. Custom messages replace `message` verbatim and leave `code`
/// untouched (see [`WithMessage`](crate::combinators::WithMessage)).
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::ValidationError;
///
/// // Static strings — zero allocation:
/// let error = ValidationError::new("required", "Required");
///
/// // Dynamic strings — allocates only when needed:
/// let error = ValidationError::new("one_of", format!("Must be {}", "admin"));
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{}", self.render())]
pub struct ValidationError {
    /// Error code identifying the failing rule.
    ///
    /// Examples: "required", "email", "one_of", "number"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Parameters describing the failing rule's configuration.
    ///
    /// Example: `[("options", "admin, super admin")]`
    pub params: Params,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Creates a "custom" error with just a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    fn render(&self) -> String {
        let mut out = format!("{}: {}", self.code, self.message);
        if !self.params.is_empty() {
            out.push_str(" (");
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{k}={v}");
            }
            out.push(')');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(error.params.is_empty());
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("one_of", "Must be admin")
            .with_param("options", "admin")
            .with_param("actual", "guest");

        assert_eq!(error.param("options"), Some("admin"));
        assert_eq!(error.param("actual"), Some("guest"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn test_display() {
        let error = ValidationError::new("required", "Required");
        assert_eq!(error.to_string(), "required: Required");

        let error = ValidationError::new("one_of", "Must be admin").with_param("options", "admin");
        assert_eq!(error.to_string(), "one_of: Must be admin (options=admin)");
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("required", "Required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_dynamic_strings() {
        let error = ValidationError::new("custom", format!("error {}", 42));
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Owned(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let error = ValidationError::new("email", "Invalid email format");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["code"], "email");
        assert_eq!(json["message"], "Invalid email format");
    }
}
