//! Tenkey: a four-function keypad calculator
//!
//! Input arrives one key at a time. A small state machine keeps the left
//! operand, the pending operator and the operand being typed, and pushes
//! what to show to a [`DisplaySink`]. There is no expression parsing and no
//! operator precedence: one pending operation is applied at a time, as on a
//! pocket calculator.
//!
//! # Pieces
//!
//! - [`InputBuffer`]: digits and decimal point of the operand being typed
//! - [`compute`]: the four operations, failing on division by zero
//! - [`NumberFormatter`]: results within the display's digit budget
//! - [`Calculator`]: the state machine tying them together
//! - [`resolve`]: key labels to [`KeyToken`]s
//!
//! # Example
//!
//! ```rust
//! use tenkey::{CalcState, Calculator, Screen};
//!
//! let mut calc = Calculator::new(Screen::default());
//! for key in ["5", "+", "5", "=", "x", "2", "="] {
//!     calc.press(key);
//! }
//!
//! assert_eq!(calc.display().main(), "20");
//! assert_eq!(calc.display().history(), "10x2=");
//! assert_eq!(calc.state(), CalcState::ResultShown);
//! ```

pub mod calculator;
pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod evaluator;
pub mod formatter;
pub mod input_buffer;
pub mod keypad;

// Re-export commonly used types
pub use crate::calculator::{CalcState, Calculator};
pub use crate::config::Config;
pub use crate::core::State;
pub use crate::display::{DisplaySink, Screen};
pub use crate::error::{CalcError, ConfigError};
pub use crate::evaluator::{compute, Operation};
pub use crate::formatter::NumberFormatter;
pub use crate::input_buffer::InputBuffer;
pub use crate::keypad::{resolve, KeyToken};
