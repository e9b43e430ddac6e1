//! Core state machine types.
//!
//! This module contains the pieces every machine in the crate shares:
//! - State definitions via the `State` trait and the `state_enum!` macro
//! - An ordered log of state transitions
//!
//! Nothing here touches the display or performs arithmetic.

mod history;
#[macro_use]
mod macros;
mod state;

pub use history::{Transition, TransitionLog};
pub use state::State;
