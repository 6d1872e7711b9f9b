//! Errors raised by the definition-time core.

use thiserror::Error;

/// Errors that can occur while constructing or naming an event.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("Event must have at least one source state")]
    NoSourceStates,

    #[error("Event already bound to name '{name}'")]
    AlreadyBound { name: String },
}

/// Errors that can occur when querying a model's state subsets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown states: {}", .states.join(", "))]
    UnknownStates { states: Vec<String> },
}
