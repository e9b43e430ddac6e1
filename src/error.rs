//! Error types.

use thiserror::Error;

/// Failures that can come out of evaluating a pending operation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The divisor was zero
    #[error("division by zero")]
    DivideByZero,

    /// An operand or the result was not a number
    #[error("result is not a number")]
    NotANumber,

    /// The result is outside the representable range
    #[error("result overflowed")]
    Overflow,
}

impl CalcError {
    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, Self::DivideByZero)
    }
}

/// Errors that can occur while loading a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
