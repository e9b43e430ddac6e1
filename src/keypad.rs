//! Key resolution: raw key text to keypad tokens.
//!
//! The calculator only ever sees [`KeyToken`]s. Anything that does not map
//! to one is dropped here.

use crate::evaluator::Operation;
use serde::{Deserialize, Serialize};

/// One recognised keypad input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyToken {
    /// A digit in `0..=9`
    Digit(u8),
    DecimalPoint,
    Operator(Operation),
    Equals,
    Clear,
}

impl KeyToken {
    /// Canonical keypad symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Digit(d) => DIGITS.get(usize::from(d)).copied().unwrap_or("?"),
            Self::DecimalPoint => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "C",
        }
    }
}

impl std::fmt::Display for KeyToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

const KEY_MAP: &[(&str, KeyToken)] = &[
    ("0", KeyToken::Digit(0)),
    ("1", KeyToken::Digit(1)),
    ("2", KeyToken::Digit(2)),
    ("3", KeyToken::Digit(3)),
    ("4", KeyToken::Digit(4)),
    ("5", KeyToken::Digit(5)),
    ("6", KeyToken::Digit(6)),
    ("7", KeyToken::Digit(7)),
    ("8", KeyToken::Digit(8)),
    ("9", KeyToken::Digit(9)),
    (".", KeyToken::DecimalPoint),
    ("+", KeyToken::Operator(Operation::Add)),
    ("-", KeyToken::Operator(Operation::Subtract)),
    ("x", KeyToken::Operator(Operation::Multiply)),
    ("*", KeyToken::Operator(Operation::Multiply)),
    ("×", KeyToken::Operator(Operation::Multiply)),
    ("÷", KeyToken::Operator(Operation::Divide)),
    ("/", KeyToken::Operator(Operation::Divide)),
    ("=", KeyToken::Equals),
    ("C", KeyToken::Clear),
    ("c", KeyToken::Clear),
];

/// Resolve a key label to a token.
///
/// Surrounding whitespace is ignored. Empty and unknown labels give `None`.
///
/// ```rust
/// use tenkey::{resolve, KeyToken, Operation};
///
/// assert_eq!(resolve("7"), Some(KeyToken::Digit(7)));
/// assert_eq!(resolve(" ÷ "), Some(KeyToken::Operator(Operation::Divide)));
/// assert_eq!(resolve("@"), None);
/// ```
pub fn resolve(key: &str) -> Option<KeyToken> {
    let key = key.trim();
    KEY_MAP
        .iter()
        .find(|(label, _)| *label == key)
        .map(|&(_, token)| token)
}
