//! Running automata.
//!
//! An [`Automaton`] holds a current state over the shared model of its type.
//! Every transition is checked against the model on each call.

pub(crate) mod error;
mod machine;

pub use crate::core::LookupError;
pub use error::TransitionError;
pub use machine::{Automaton, InstanceBuilder};
