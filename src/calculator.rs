//! The calculator state machine.
//!
//! [`Calculator`] owns the whole session: current state, left operand,
//! pending operator, history text and the operand being typed. Every input
//! runs to completion and ends by pushing something to the display.

use crate::config::Config;
use crate::core::{State, Transition, TransitionLog};
use crate::display::DisplaySink;
use crate::error::CalcError;
use crate::evaluator::{compute, Operation};
use crate::formatter::{plain, NumberFormatter};
use crate::input_buffer::InputBuffer;
use crate::keypad::{resolve, KeyToken};
use chrono::Utc;
use tracing::{debug, warn};

crate::state_enum! {
    /// Where the calculator is in an operation chain.
    pub enum CalcState {
        /// Fresh or just cleared; nothing typed yet
        Ready,
        /// Typing the first operand, or a fresh one after a result
        InputtingFirst,
        /// An operator is pending; typing the right operand
        OperatorEntered,
        /// A result from `=` is on the display
        ResultShown,
        /// An evaluation failed; a digit starts over
        Error,
    }
    error: [Error]
}

/// Four-function calculator driven by keypad tokens.
pub struct Calculator<D: DisplaySink> {
    state: CalcState,
    left: Option<f64>,
    operator: Option<Operation>,
    history: String,
    buffer: InputBuffer,
    formatter: NumberFormatter,
    config: Config,
    display: D,
    transitions: TransitionLog<CalcState>,
}

impl<D: DisplaySink> Calculator<D> {
    /// Create a calculator with default settings and show `0`.
    pub fn new(display: D) -> Self {
        Self::with_config(display, Config::default())
    }

    /// Create a calculator with the given settings and show `0`.
    pub fn with_config(display: D, config: Config) -> Self {
        let mut calculator = Self {
            state: CalcState::Ready,
            left: None,
            operator: None,
            history: String::new(),
            buffer: InputBuffer::with_max_digits(config.max_digits),
            formatter: NumberFormatter::new(config.max_digits, config.exponent_digits),
            config,
            display,
            transitions: TransitionLog::new(),
        };
        calculator.display.render(calculator.buffer.as_str());
        calculator
    }

    /// Resolve a key label and handle it.
    ///
    /// Returns `false` without touching any state if the key is not on the
    /// keypad.
    pub fn press(&mut self, key: &str) -> bool {
        match resolve(key) {
            Some(token) => {
                self.handle(token);
                true
            }
            None => {
                debug!(key, "unrecognised key ignored");
                false
            }
        }
    }

    /// Dispatch one token to its handler.
    pub fn handle(&mut self, token: KeyToken) {
        debug!(token = %token, state = self.state.name(), "handling token");
        match token {
            KeyToken::Operator(Operation::Subtract) if self.state == CalcState::Ready => {
                self.handle_negative_sign();
            }
            KeyToken::Digit(d) => self.handle_digit(d),
            KeyToken::DecimalPoint => self.handle_decimal_point(),
            KeyToken::Operator(op) => self.handle_operator(op),
            KeyToken::Equals => self.handle_equal(),
            KeyToken::Clear => self.handle_clear(),
        }
    }

    /// A `-` before any digit makes the first operand negative.
    fn handle_negative_sign(&mut self) {
        self.buffer.set_negative();
        self.display.render(self.buffer.as_str());
        self.transition_to(
            CalcState::InputtingFirst,
            KeyToken::Operator(Operation::Subtract),
        );
    }

    /// Type a digit, recovering from `Error` or starting over after a result.
    pub fn handle_digit(&mut self, digit: u8) {
        let input = KeyToken::Digit(digit);
        match self.state {
            CalcState::Error => {
                self.buffer.clear();
                self.transition_to(CalcState::InputtingFirst, input);
            }
            CalcState::ResultShown => {
                // a digit after a result starts a new chain
                self.buffer.clear();
                self.left = None;
                self.operator = None;
                self.transition_to(CalcState::InputtingFirst, input);
            }
            _ => {}
        }

        self.buffer.push_digit(digit);
        self.display.render(self.buffer.as_str());

        if self.state == CalcState::Ready {
            self.transition_to(CalcState::InputtingFirst, input);
        }
    }

    /// Type a decimal point; the state does not change.
    pub fn handle_decimal_point(&mut self) {
        self.buffer.push_decimal();
        self.display.render(self.buffer.as_str());
    }

    /// Make `op` pending, first folding any pending operation into the left operand.
    pub fn handle_operator(&mut self, op: Operation) {
        match self.state {
            CalcState::ResultShown => {
                if let Some(left) = self.left {
                    self.adopt_operator(left, op);
                }
            }
            CalcState::InputtingFirst => {
                let left = self.buffer.to_number();
                self.left = Some(left);
                self.adopt_operator(left, op);
            }
            CalcState::OperatorEntered => {
                let (Some(left), Some(pending)) = (self.left, self.operator) else {
                    return;
                };
                let right = self.buffer.to_number();
                match evaluate(left, pending, right) {
                    Ok(result) => {
                        self.left = Some(result);
                        let text = self.formatter.format_for_display(result);
                        self.display.render(&text);
                        self.adopt_operator(result, op);
                    }
                    Err(error) => self.fail(error, KeyToken::Operator(op)),
                }
            }
            CalcState::Ready | CalcState::Error => {
                debug!(state = self.state.name(), "operator ignored");
            }
        }
    }

    /// Evaluate the pending operation and show the result or an error.
    pub fn handle_equal(&mut self) {
        if self.state == CalcState::ResultShown {
            return;
        }
        let (Some(left), Some(op)) = (self.left, self.operator) else {
            return;
        };

        let right = self.buffer.to_number();
        self.history = format!("{}{}{}=", plain(left), op, plain(right));
        self.display.render_history(&self.history);

        match evaluate(left, op, right) {
            Ok(result) => {
                let text = self.formatter.format_for_display(result);
                self.display.render(&text);
                self.left = Some(result);
                self.transition_to(CalcState::ResultShown, KeyToken::Equals);
            }
            Err(error) => self.fail(error, KeyToken::Equals),
        }
    }

    /// Drop the whole chain and show `0`.
    pub fn handle_clear(&mut self) {
        self.buffer.clear();
        self.display.render(self.buffer.as_str());
        self.display.clear_history();
        self.history.clear();
        self.left = None;
        self.operator = None;
        self.transition_to(CalcState::Ready, KeyToken::Clear);
    }

    /// Make `op` pending on `left` and start a fresh right operand.
    fn adopt_operator(&mut self, left: f64, op: Operation) {
        self.operator = Some(op);
        self.history = format!("{} {}", plain(left), op);
        self.display.render_history(&self.history);
        self.buffer.clear();
        self.transition_to(CalcState::OperatorEntered, KeyToken::Operator(op));
    }

    /// Show the error and drop the chain.
    fn fail(&mut self, error: CalcError, input: KeyToken) {
        warn!(%error, input = %input, "evaluation failed");
        self.display.render_error(self.config.error_text_for(error));
        self.left = None;
        self.operator = None;
        self.buffer.clear();
        self.transition_to(CalcState::Error, input);
    }

    fn transition_to(&mut self, next: CalcState, input: KeyToken) {
        if self.state == next {
            return;
        }
        debug!(
            from = self.state.name(),
            to = next.name(),
            input = %input,
            "state transition"
        );
        self.transitions = std::mem::take(&mut self.transitions).record(Transition {
            from: self.state,
            to: next,
            timestamp: Utc::now(),
            input: input.symbol().to_string(),
        });
        self.state = next;
    }

    /// Get current state
    pub fn state(&self) -> CalcState {
        self.state
    }

    /// Accumulated result of the current chain.
    pub fn left_operand(&self) -> Option<f64> {
        self.left
    }

    /// Operator waiting for its right operand.
    pub fn pending_operator(&self) -> Option<Operation> {
        self.operator
    }

    /// Current history text.
    pub fn history(&self) -> &str {
        &self.history
    }

    /// Operand currently being typed.
    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// Settings the calculator was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the display sink
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get the display sink mutably
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Consume the calculator and hand back its display sink.
    pub fn into_display(self) -> D {
        self.display
    }

    /// Every state change since the calculator was created.
    pub fn transitions(&self) -> &TransitionLog<CalcState> {
        &self.transitions
    }
}

/// Compute, then reject outcomes the display cannot show as a number.
fn evaluate(left: f64, op: Operation, right: f64) -> Result<f64, CalcError> {
    let result = compute(left, op, right)?;
    if result.is_nan() {
        Err(CalcError::NotANumber)
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(result)
    }
}
