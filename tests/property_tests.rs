//! Property-based tests for the input buffer, evaluator and calculator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use tenkey::core::State;
use tenkey::{compute, CalcError, CalcState, Calculator, InputBuffer, KeyToken, Operation, Screen};

prop_compose! {
    /// Digit strings with no leading zero, as a user would type them.
    fn typed_digits()(first in 1..=9u8, rest in prop::collection::vec(0..=9u8, 0..8)) -> Vec<u8> {
        let mut digits = vec![first];
        digits.extend(rest);
        digits
    }
}

fn arbitrary_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn arbitrary_token() -> impl Strategy<Value = KeyToken> {
    prop_oneof![
        4 => (0..=9u8).prop_map(KeyToken::Digit),
        1 => Just(KeyToken::DecimalPoint),
        2 => arbitrary_operation().prop_map(KeyToken::Operator),
        1 => Just(KeyToken::Equals),
        1 => Just(KeyToken::Clear),
    ]
}

fn is_valid_numeral(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    body.chars().all(|c| c.is_ascii_digit() || c == '.')
        && body.matches('.').count() <= 1
        && !body.contains('-')
}

proptest! {
    #[test]
    fn buffer_reproduces_typed_digits(digits in typed_digits()) {
        let mut buffer = InputBuffer::new();
        for &d in digits.iter().take(8) {
            buffer.push_digit(d);
        }
        let expected: String = digits.iter().take(8).map(|d| d.to_string()).collect();
        prop_assert_eq!(buffer.as_str(), expected.as_str());
    }

    #[test]
    fn digit_cap_freezes_buffer(
        digits in typed_digits(),
        extra in prop::collection::vec(0..=9u8, 1..5)
    ) {
        let mut buffer = InputBuffer::new();
        for d in std::iter::repeat(digits[0]).take(8) {
            buffer.push_digit(d);
        }
        prop_assert_eq!(buffer.digit_count(), 8);

        let frozen = buffer.as_str().to_string();
        for d in extra {
            buffer.push_digit(d);
            prop_assert_eq!(buffer.as_str(), frozen.as_str());
        }
    }

    #[test]
    fn decimal_is_idempotent(digits in prop::collection::vec(0..=9u8, 0..6)) {
        let mut buffer = InputBuffer::new();
        for d in digits {
            buffer.push_digit(d);
        }
        buffer.push_decimal();
        let once = buffer.clone();
        buffer.push_decimal();
        prop_assert_eq!(buffer, once);
    }

    #[test]
    fn digits_round_trip_to_integer(digits in typed_digits()) {
        let mut buffer = InputBuffer::new();
        let mut expected = 0u64;
        for &d in digits.iter().take(8) {
            buffer.push_digit(d);
            expected = expected * 10 + u64::from(d);
        }
        prop_assert_eq!(buffer.to_number(), expected as f64);
    }

    #[test]
    fn compute_is_total_for_non_division(
        left in -1e12f64..1e12,
        right in -1e12f64..1e12,
        op in prop_oneof![Just(Operation::Add), Just(Operation::Subtract), Just(Operation::Multiply)]
    ) {
        let first = compute(left, op, right);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, compute(left, op, right));
    }

    #[test]
    fn divide_by_zero_always_fails(left in prop::num::f64::ANY) {
        prop_assert_eq!(compute(left, Operation::Divide, 0.0), Err(CalcError::DivideByZero));
    }

    #[test]
    fn buffer_stays_a_valid_numeral(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let mut calc = Calculator::new(Screen::default());
        for token in tokens {
            calc.handle(token);
            let text = calc.buffer().as_str();
            prop_assert!(is_valid_numeral(text), "invalid buffer {:?}", text);
            prop_assert!(calc.buffer().digit_count() <= 8);
        }
    }

    #[test]
    fn operand_and_operator_are_paired(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let mut calc = Calculator::new(Screen::default());
        for token in tokens {
            calc.handle(token);
            prop_assert_eq!(calc.left_operand().is_some(), calc.pending_operator().is_some());
        }
    }

    #[test]
    fn error_screen_matches_error_state(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let mut calc = Calculator::new(Screen::default());
        for token in tokens {
            calc.handle(token);
            if calc.display().is_error() {
                prop_assert!(calc.state().is_error());
            }
        }
    }

    #[test]
    fn clear_always_resets(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let mut calc = Calculator::new(Screen::default());
        for token in tokens {
            calc.handle(token);
        }
        calc.handle(KeyToken::Clear);

        prop_assert_eq!(calc.state(), CalcState::Ready);
        prop_assert_eq!(calc.display().main(), "0");
        prop_assert_eq!(calc.display().history(), "");
        prop_assert_eq!(calc.left_operand(), None);
        prop_assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn transition_log_is_contiguous(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let mut calc = Calculator::new(Screen::default());
        for token in tokens {
            calc.handle(token);
        }

        let transitions = calc.transitions().transitions();
        if let Some(first) = transitions.first() {
            prop_assert_eq!(first.from, CalcState::Ready);
        }
        for pair in transitions.windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
        }
        for transition in transitions {
            prop_assert_ne!(transition.from, transition.to);
        }
        if let Some(last) = transitions.last() {
            prop_assert_eq!(last.to, calc.state());
        }
    }
}
