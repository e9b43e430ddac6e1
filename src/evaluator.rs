//! The four arithmetic operations.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// A binary operation on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Keypad symbol, also used in the history line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Apply `op` to `left` and `right`.
///
/// Division checks the divisor before dividing and fails with
/// [`CalcError::DivideByZero`] when it is zero. No rounding is applied.
///
/// ```rust
/// use tenkey::{compute, CalcError, Operation};
///
/// assert_eq!(compute(8.0, Operation::Divide, 2.0), Ok(4.0));
/// assert_eq!(compute(1.0, Operation::Divide, 0.0), Err(CalcError::DivideByZero));
/// ```
pub fn compute(left: f64, op: Operation, right: f64) -> Result<f64, CalcError> {
    match op {
        Operation::Add => Ok(left + right),
        Operation::Subtract => Ok(left - right),
        Operation::Multiply => Ok(left * right),
        Operation::Divide => {
            if right == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            Ok(left / right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_computes_sum() {
        assert_eq!(compute(1.0, Operation::Add, 2.0), Ok(3.0));
    }

    #[test]
    fn subtract_computes_difference() {
        assert_eq!(compute(4.0, Operation::Subtract, 3.0), Ok(1.0));
        assert_eq!(compute(3.0, Operation::Subtract, 4.0), Ok(-1.0));
    }

    #[test]
    fn multiply_computes_product() {
        assert_eq!(compute(5.0, Operation::Multiply, 6.0), Ok(30.0));
    }

    #[test]
    fn divide_computes_quotient() {
        assert_eq!(compute(8.0, Operation::Divide, 2.0), Ok(4.0));
        assert_eq!(compute(1.0, Operation::Divide, 4.0), Ok(0.25));
    }

    #[test]
    fn divide_by_zero_fails() {
        assert_eq!(
            compute(10.0, Operation::Divide, 0.0),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(
            compute(0.0, Operation::Divide, 0.0),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn negative_zero_divisor_also_fails() {
        assert_eq!(
            compute(3.0, Operation::Divide, -0.0),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn nan_operands_propagate_without_failing() {
        let result = compute(f64::NAN, Operation::Add, 1.0).unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn symbols_match_keypad() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "x");
        assert_eq!(Operation::Divide.to_string(), "÷");
    }
}
