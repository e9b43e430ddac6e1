//! Text accumulator for the operand currently being typed.

use crate::config::DEFAULT_MAX_DIGITS;

const ZERO: &str = "0";

/// Holds the operand being entered as text.
///
/// The value is always a valid, possibly partial, numeral: an optional
/// leading `-`, digits, at most one `.`, and never more than `max_digits`
/// characters that are neither `-` nor `.`.
///
/// ```rust
/// use tenkey::InputBuffer;
///
/// let mut buffer = InputBuffer::new();
/// buffer.push_digit(1);
/// buffer.push_decimal();
/// buffer.push_decimal();
/// buffer.push_digit(5);
/// assert_eq!(buffer.as_str(), "1.5");
/// assert_eq!(buffer.to_number(), 1.5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
    max_digits: usize,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::with_max_digits(DEFAULT_MAX_DIGITS)
    }

    pub fn with_max_digits(max_digits: usize) -> Self {
        Self {
            value: ZERO.to_string(),
            max_digits,
        }
    }

    /// Replace a pristine `"0"` with a lone `-`. No-op otherwise.
    pub fn set_negative(&mut self) {
        if self.value == ZERO {
            self.value = "-".to_string();
        }
    }

    /// Append a digit.
    ///
    /// Digits above 9 and presses beyond the digit cap are ignored. A leading
    /// zero is never kept: `0` on `"0"` does nothing, any other digit replaces it.
    pub fn push_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        if self.digit_count() >= self.max_digits {
            return;
        }

        let ch = char::from(b'0' + digit);
        if self.value == ZERO {
            if digit != 0 {
                self.value = ch.to_string();
            }
        } else {
            self.value.push(ch);
        }
    }

    /// Append a decimal point unless one is already present.
    pub fn push_decimal(&mut self) {
        if self.value.contains('.') {
            return;
        }
        self.value.push('.');
    }

    pub fn clear(&mut self) {
        self.value = ZERO.to_string();
    }

    /// Numeric value of the current text.
    ///
    /// An empty string and a lone `.` read as zero. A lone `-` has no digits
    /// to read and yields NaN.
    pub fn to_number(&self) -> f64 {
        if self.value.is_empty() || self.value == "." {
            return 0.0;
        }
        self.value.parse().unwrap_or(f64::NAN)
    }

    /// Current text, verbatim.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// True iff the text is empty, which the `"0"` floor never allows.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Characters in the text other than `-` and `.`.
    pub fn digit_count(&self) -> usize {
        self.value.chars().filter(|c| !matches!(c, '-' | '.')).count()
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }
}

impl std::fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
