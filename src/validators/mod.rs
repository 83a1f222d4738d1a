//! Built-in validators
//!
//! Ready-to-use leaf validators for common form-field rules. Each validator
//! has a snake_case factory function and a default error message; wrap any
//! of them in [`with_message`](crate::foundation::ValidateExt::with_message)
//! to replace the message verbatim.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let email_field = chain![required(), email()];
//! let role_field = chain![one_of(["admin", "super admin"]).unwrap()];
//! let age_field = chain![required(), number()];
//! ```

pub mod content;
pub mod membership;
pub mod numeric;
pub mod required;

pub use content::{Email, email};
pub use membership::{OneOf, one_of};
pub use numeric::{Number, number};
pub use required::{Required, required};
