//! Calculator-wide settings.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Digits a single operand or a plain result may occupy on the display.
pub const DEFAULT_MAX_DIGITS: usize = 8;

/// Fractional mantissa digits used when a result falls back to exponent form.
pub const DEFAULT_EXPONENT_DIGITS: usize = 4;

/// Largest mantissa precision a config may ask for.
pub const MAX_EXPONENT_DIGITS: usize = 100;

/// Settings shared by the input buffer, the formatter and the calculator.
///
/// Every field has a default, so a config file only needs to name what it
/// changes:
///
/// ```rust
/// use tenkey::Config;
///
/// let config = Config::from_toml_str("error_text = \"E\"").unwrap();
/// assert_eq!(config.error_text, "E");
/// assert_eq!(config.max_digits, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_digits: usize,
    pub exponent_digits: usize,
    /// Shown when an evaluation fails for any reason other than division by zero
    pub error_text: String,
    pub divide_by_zero_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            exponent_digits: DEFAULT_EXPONENT_DIGITS,
            error_text: "Error".to_string(),
            divide_by_zero_text: "エラー".to_string(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_digits == 0 {
            return Err(ConfigError::Invalid(
                "max_digits must be at least 1".to_string(),
            ));
        }
        if self.exponent_digits > MAX_EXPONENT_DIGITS {
            return Err(ConfigError::Invalid(format!(
                "exponent_digits must be at most {MAX_EXPONENT_DIGITS}"
            )));
        }
        if self.error_text.is_empty() || self.divide_by_zero_text.is_empty() {
            return Err(ConfigError::Invalid(
                "error texts must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Text to show for a failed evaluation.
    pub fn error_text_for(&self, error: crate::CalcError) -> &str {
        if error.is_divide_by_zero() {
            &self.divide_by_zero_text
        } else {
            &self.error_text
        }
    }
}
