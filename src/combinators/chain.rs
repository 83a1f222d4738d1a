//! CHAIN combinator - ordered, short-circuiting sequence of validators
//!
//! This module provides the [`Chain`] combinator, the library's composer:
//! it holds an ordered sequence of validators and runs each against the same
//! value, surfacing the first failure.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let field = chain![required(), email()];
//! assert!(field.validate(Some("a@b.c")).is_ok());
//!
//! // `required` fails first; `email` is never consulted.
//! let err = field.validate(None).unwrap_err();
//! assert_eq!(err.code, "required");
//! ```

use std::fmt;

use crate::foundation::{BoxedValidator, Validate, ValidationError};

/// An ordered sequence of validators with first-failure semantics.
///
/// Invoking a chain runs each validator **in order** against the same value
/// and returns the error from the first validator that reports one.
/// Validators after a failing one are not invoked. An empty chain accepts
/// every value.
///
/// Validators are stored as [`BoxedValidator`] trait objects so a single
/// chain can mix validator types; the [`chain!`](crate::chain) macro boxes
/// each element for you.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let chain = Chain::new().with(required()).with(number());
/// assert!(chain.validate(Some("123")).is_ok());
/// assert!(chain.validate(Some("1 hundred")).is_err());
/// ```
#[derive(Default)]
pub struct Chain {
    validators: Vec<BoxedValidator>,
}

impl Chain {
    /// Creates an empty chain, which accepts every value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Appends a validator, builder-style.
    #[must_use]
    pub fn with(mut self, validator: impl Validate + Send + Sync + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Appends an already-boxed validator.
    pub fn push(&mut self, validator: BoxedValidator) {
        self.validators.push(validator);
    }

    /// Returns the number of validators in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if the chain holds no validators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validate for Chain {
    fn validate(&self, value: Option<&str>) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(value)?;
        }
        Ok(())
    }
}

impl FromIterator<BoxedValidator> for Chain {
    fn from_iter<I: IntoIterator<Item = BoxedValidator>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("len", &self.validators.len())
            .finish()
    }
}

/// Builds a [`Chain`] from an ordered collection of boxed validators.
///
/// This is useful when the set of rules is assembled at runtime, e.g. from a
/// form definition. For a fixed rule list, prefer the
/// [`chain!`](crate::chain) macro.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let rules = vec![required().boxed(), email().boxed()];
/// let field = validate(rules);
/// assert!(field.validate(Some("a@b.c")).is_ok());
/// ```
pub fn validate<I>(validators: I) -> Chain
where
    I: IntoIterator<Item = BoxedValidator>,
{
    validators.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    struct Fails(&'static str);

    impl Validate for Fails {
        fn validate(&self, _value: Option<&str>) -> Result<(), ValidationError> {
            Err(ValidationError::custom(self.0))
        }
    }

    struct Passes;

    impl Validate for Passes {
        fn validate(&self, _value: Option<&str>) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_chain_accepts_everything() {
        let chain = Chain::new();
        assert!(chain.validate(Some("anything")).is_ok());
        assert!(chain.validate(Some("")).is_ok());
        assert!(chain.validate(None).is_ok());
    }

    #[test]
    fn test_all_pass() {
        let chain = Chain::new().with(Passes).with(Passes);
        assert!(chain.validate(Some("x")).is_ok());
    }

    #[test]
    fn test_first_error_wins() {
        let chain = Chain::new()
            .with(Passes)
            .with(Fails("second"))
            .with(Fails("third"));

        let err = chain.validate(Some("x")).unwrap_err();
        assert_eq!(err.message, "second");
    }

    #[test]
    fn test_from_boxed() {
        let chain = validate(vec![Passes.boxed(), Fails("boom").boxed()]);
        assert_eq!(chain.len(), 2);
        assert!(chain.validate(Some("x")).is_err());
    }

    #[test]
    fn test_len_and_is_empty() {
        let chain = Chain::new();
        assert!(chain.is_empty());
        let chain = chain.with(Passes);
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
    }
}
