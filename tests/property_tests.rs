//! Property-based tests for fieldcheck.

use fieldcheck::prelude::*;
use proptest::prelude::*;

// ============================================================================
// PURITY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn email_idempotent(s in ".*") {
        let v = email();
        let r1 = v.validate(Some(s.as_str()));
        let r2 = v.validate(Some(s.as_str()));
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }

    #[test]
    fn number_idempotent(s in ".*") {
        let v = number();
        let r1 = v.validate(Some(s.as_str()));
        let r2 = v.validate(Some(s.as_str()));
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }
}

// ============================================================================
// LEAF LAWS
// ============================================================================

proptest! {
    #[test]
    fn required_rejects_exactly_the_empty_string(s in ".*") {
        prop_assert_eq!(required().validate(Some(s.as_str())).is_ok(), !s.is_empty());
    }

    #[test]
    fn number_accepts_exactly_finite_parses(s in ".*") {
        let accepted = number().validate(Some(s.as_str())).is_ok();
        let expected = s
            .trim()
            .parse::<f64>()
            .is_ok_and(f64::is_finite);
        prop_assert_eq!(accepted, expected);
    }

    #[test]
    fn one_of_accepts_exactly_its_members(
        s in "[a-z]{0,6}",
        options in proptest::collection::vec("[a-z]{1,5}", 1..4),
    ) {
        let v = one_of(options.clone()).unwrap();
        let expected = options.iter().any(|option| option == &s);
        prop_assert_eq!(v.validate(Some(s.as_str())).is_ok(), expected);
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    // A chain passes iff every constituent validator passes.
    #[test]
    fn chain_equals_manual_fold(s in ".{0,20}") {
        let field = chain![required(), number()];
        let manual = required()
            .validate(Some(s.as_str()))
            .and_then(|()| number().validate(Some(s.as_str())));

        prop_assert_eq!(field.validate(Some(s.as_str())).is_ok(), manual.is_ok());
    }

    #[test]
    fn empty_chain_accepts_everything(s in ".*") {
        prop_assert!(chain![].validate(Some(s.as_str())).is_ok());
    }

    // Overriding the message never changes the outcome, only the text.
    #[test]
    fn with_message_preserves_outcome(s in ".*") {
        let plain = email();
        let custom = email().with_message("custom");
        prop_assert_eq!(
            plain.validate(Some(s.as_str())).is_ok(),
            custom.validate(Some(s.as_str())).is_ok()
        );
    }

    #[test]
    fn and_agrees_with_its_parts(s in ".{0,10}") {
        let left = required();
        let right = email();
        let combined = left.and(right);

        let expected = required().validate(Some(s.as_str())).is_ok()
            && email().validate(Some(s.as_str())).is_ok();
        prop_assert_eq!(combined.validate(Some(s.as_str())).is_ok(), expected);
    }
}
