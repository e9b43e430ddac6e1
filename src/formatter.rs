//! Number-to-text rendering for the display.

use crate::config::{DEFAULT_EXPONENT_DIGITS, DEFAULT_MAX_DIGITS, MAX_EXPONENT_DIGITS};

/// Magnitudes at or above this are written in exponent form.
const EXPONENT_UPPER: f64 = 1e21;
/// Nonzero magnitudes below this are written in exponent form.
const EXPONENT_LOWER: f64 = 1e-6;
/// Significant decimal digits needed to spell any finite f64 exactly.
const EXACT_DIGITS: usize = 767;

/// Plain text form of a number.
///
/// Shortest text that reads back to the same value, without a trailing
/// `.0` on integers. Very large and very small magnitudes switch to exponent
/// form with an explicit exponent sign (`1e+21`, `1.5e-7`).
pub fn plain(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // covers -0.0
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        signed_exponent(format!("{n:e}"))
    } else {
        format!("{n}")
    }
}

/// Rust writes `1e21`; the display wants `1e+21`.
fn signed_exponent(text: String) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Exponent form with `digits` fractional mantissa digits.
///
/// Halves round away from zero: `1.23445e8` becomes `1.2345e+8`. The value
/// is first written out exactly so the tie decision sees every digit.
fn exponential(n: f64, digits: usize) -> String {
    if !n.is_finite() {
        return plain(n);
    }
    let exact = format!("{:.*e}", digits + EXACT_DIGITS, n.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return plain(n);
    };
    let Ok(mut exponent) = exponent.parse::<i32>() else {
        return plain(n);
    };

    let mut kept: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let round_up = kept[digits + 1] >= b'5';
    kept.truncate(digits + 1);

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            // 9.99..95 rounds to 10.00..0
            kept.insert(0, b'1');
            kept.pop();
            exponent += 1;
        }
    }

    let mut text = String::with_capacity(digits + 8);
    if n.is_sign_negative() {
        text.push('-');
    }
    text.push(char::from(kept[0]));
    if digits > 0 {
        text.push('.');
        text.extend(kept[1..].iter().map(|&d| char::from(d)));
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    text.push_str(&format!("e{sign}{}", exponent.abs()));
    text
}

/// Fits results into the display's digit budget.
///
/// ```rust
/// use tenkey::NumberFormatter;
///
/// let formatter = NumberFormatter::default();
/// assert_eq!(formatter.format_for_display(20.0), "20");
/// assert_eq!(formatter.format_for_display(123456789.0), "1.2346e+8");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormatter {
    max_digits: usize,
    exponent_digits: usize,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIGITS, DEFAULT_EXPONENT_DIGITS)
    }
}

impl NumberFormatter {
    /// Exponent precision is capped at [`MAX_EXPONENT_DIGITS`].
    pub fn new(max_digits: usize, exponent_digits: usize) -> Self {
        Self {
            max_digits,
            exponent_digits: exponent_digits.min(MAX_EXPONENT_DIGITS),
        }
    }

    /// True iff the plain text of `n`, minus `-` and `.`, is within budget.
    pub fn fits(&self, n: f64) -> bool {
        plain(n).chars().filter(|c| !matches!(c, '-' | '.')).count() <= self.max_digits
    }

    /// Plain text when it fits, exponent form with a fixed mantissa otherwise.
    pub fn format_for_display(&self, n: f64) -> String {
        if self.fits(n) {
            plain(n)
        } else {
            exponential(n, self.exponent_digits)
        }
    }
}
