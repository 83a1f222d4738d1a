//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck::prelude::*;` import that brings in the
//! core traits, the error type, all built-in validators, and the
//! combinators.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let field = chain![required(), email()];
//! assert!(field.validate(Some("a@b.c")).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    BoxedValidator, Validate, ValidateExt, ValidationError, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{Email, Number, OneOf, Required, email, number, one_of, required};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Chain, WithMessage, and, validate, with_message};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{chain, validator};
