//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the library:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! # Architecture
//!
//! A validator is a pure function of a single field value. The value is an
//! `Option<&str>`: form layers hand in `None` for a field that was never
//! supplied and `Some(s)` for a present string. Validators read the value,
//! never mutate it, and report failure as a structured [`ValidationError`]:
//!
//! ```rust,ignore
//! impl Validate for Required {
//!     fn validate(&self, value: Option<&str>) -> Result<(), ValidationError> {
//!         // ...
//!     }
//! }
//! ```
//!
//! Configuration (an options list, a custom message) is captured at
//! construction time and immutable afterwards, so validators are freely
//! shareable across threads and reusable across calls.
//!
//! Composition happens through the combinators in
//! [`crate::combinators`]: [`and`](ValidateExt::and) for pairwise
//! conjunction, [`Chain`](crate::combinators::Chain) for an ordered,
//! short-circuiting sequence, and
//! [`with_message`](ValidateExt::with_message) for verbatim message
//! overrides.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{BoxedValidator, Validate, ValidateExt};

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult = Result<(), ValidationError>;
