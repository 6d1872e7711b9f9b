//! Errors raised by running automata.

use thiserror::Error;

/// Errors that can occur when firing an event.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Unrecognized event '{event}'")]
    UnknownEvent { event: String },

    #[error("The specified event '{event}' is invalid in current state '{state}'")]
    InvalidInState { event: String, state: String },
}
