//! # fieldcheck
//!
//! Composable, short-circuiting validators for individual form-field values.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let role = chain![required(), one_of(["admin", "super admin"]).unwrap()];
//! assert!(role.validate(Some("admin")).is_ok());
//!
//! let err = role.validate(None).unwrap_err();
//! assert_eq!(err.message, "Required");
//! ```
//!
//! A field value is an `Option<&str>`: `None` models a field that was never
//! supplied, `Some(s)` a present string. Validators are pure functions of
//! that value; a [`Chain`](combinators::Chain) runs them in order against the
//! same value and stops at the first failure.
//!
//! ## Custom messages
//!
//! Every validator supports a verbatim message override:
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let v = email().with_message("Please enter a valid email address");
//! let err = v.validate(Some("not_an_email")).unwrap_err();
//! assert_eq!(err.message, "Please enter a valid email address");
//! ```
//!
//! ## Built-in Validators
//!
//! - **Format**: [`Email`](validators::Email), a permissive `x@y.z` shape check
//! - **Presence**: [`Required`](validators::Required), rejects absent and empty values
//! - **Membership**: [`OneOf`](validators::OneOf), exact match against a fixed options list
//! - **Numeric**: [`Number`](validators::Number), value parses to a finite number

// ValidationError is the fundamental error type for every validator and is
// returned inline on the hot path; boxing it would add indirection to every
// validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
