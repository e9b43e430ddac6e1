//! State transition log.
//!
//! Keeps an ordered record of every state change a machine goes through,
//! together with the input that caused it.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use tenkey::core::Transition;
/// use tenkey::CalcState;
/// use chrono::Utc;
///
/// let transition = Transition {
///     from: CalcState::Ready,
///     to: CalcState::InputtingFirst,
///     timestamp: Utc::now(),
///     input: "7".to_string(),
/// };
/// assert_eq!(transition.input, "7");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// Keypad symbol of the input that caused the change
    pub input: String,
}

/// Ordered log of state transitions.
///
/// `record` consumes the log and hands back the extended one, so a log
/// value never changes behind the back of whoever holds it.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{Transition, TransitionLog};
/// use tenkey::CalcState;
/// use chrono::Utc;
///
/// let log = TransitionLog::new()
///     .record(Transition {
///         from: CalcState::Ready,
///         to: CalcState::InputtingFirst,
///         timestamp: Utc::now(),
///         input: "1".to_string(),
///     })
///     .record(Transition {
///         from: CalcState::InputtingFirst,
///         to: CalcState::OperatorEntered,
///         timestamp: Utc::now(),
///         input: "+".to_string(),
///     });
///
/// let path = log.path();
/// assert_eq!(path.len(), 3); // Ready -> InputtingFirst -> OperatorEntered
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    transitions: Vec<Transition<S>>,
}

impl<S: State> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionLog<S> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition, returning the extended log.
    pub fn record(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first `from` state followed by the `to` state of each
    /// transition. An empty log has an empty path.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time elapsed between the first and last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
