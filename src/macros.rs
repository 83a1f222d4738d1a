//! Macros for creating and composing validators with minimal boilerplate.
//!
//! - [`validator!`] — create a complete validator (struct + `Validate` impl
//!   + factory fn)
//! - [`chain!`] — build a [`Chain`](crate::combinators::Chain) from a list
//!   of validators
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::validator;
//! use fieldcheck::foundation::{Validate, ValidationError};
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NotBlank;
//!     rule(value) { value.is_some_and(|s| !s.trim().is_empty()) }
//!     error(value) { ValidationError::new("not_blank", "Must not be blank") }
//!     fn not_blank();
//! }
//!
//! assert!(not_blank().validate(Some("x")).is_ok());
//! assert!(not_blank().validate(Some("  ")).is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, [`Validate`]
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`. The `rule` block receives the field value as
/// `Option<&str>` and returns `bool`; the `error` block builds the
/// [`ValidationError`] returned when the rule is false.
///
/// [`Validate`]: crate::foundation::Validate
/// [`ValidationError`]: crate::foundation::ValidationError
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub Required;
///     rule(value) { value.is_some_and(|s| !s.is_empty()) }
///     error(value) { ValidationError::new("required", "Required") }
///     fn required();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub MinLength { min: usize };
///     rule(self, value) { value.unwrap_or_default().len() >= self.min }
///     error(self, value) { ValidationError::new("min_length", "Too short") }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub Email { pattern: regex::Regex };
///     rule(self, value) { self.pattern.is_match(value.unwrap_or_default()) }
///     error(self, value) { ValidationError::new("email", "Invalid email format") }
///     new() { Self { pattern: EMAIL_REGEX.clone() } }
///     fn email();
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(&self, $inp: ::std::option::Option<&str>) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(&$self_, $inp: ::std::option::Option<&str>) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 3a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(&$self_, $inp: ::std::option::Option<&str>) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// CHAIN MACRO
// ============================================================================

/// Builds a [`Chain`](crate::combinators::Chain) from an ordered list of
/// validators, boxing each one.
///
/// The resulting chain runs the validators in the listed order and stops at
/// the first failure. `chain![]` with no arguments is the empty chain, which
/// accepts every value.
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let field = chain![required(), email()];
/// assert!(field.validate(Some("a@b.c")).is_ok());
/// assert!(field.validate(None).is_err());
/// ```
#[macro_export]
macro_rules! chain {
    () => {
        $crate::combinators::Chain::new()
    };
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::Chain::new()$(.with($validator))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
