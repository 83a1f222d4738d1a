//! Validator composition
//!
//! Combinators wrap validators in other validators:
//!
//! - [`Chain`]: an ordered, short-circuiting sequence; the workhorse for
//!   form-field rules (`chain![required(), email()]`)
//! - [`And`]: pairwise conjunction with static dispatch
//! - [`WithMessage`]: verbatim custom-message override
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let username = chain![
//!     required().with_message("Username is required"),
//!     one_of(["admin", "super admin"]).unwrap(),
//! ];
//!
//! let err = username.validate(Some("guest")).unwrap_err();
//! assert_eq!(err.message, "Must be admin or super admin");
//! ```

pub mod and;
pub mod chain;
pub mod message;

pub use and::{And, and};
pub use chain::{Chain, validate};
pub use message::{WithMessage, with_message};
