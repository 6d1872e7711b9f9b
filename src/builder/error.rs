//! Definition errors raised while building automaton types and instances.

use crate::core::EventError;
use thiserror::Error;

/// Errors that can occur while defining an automaton.
///
/// A type that fails validation is never produced, so every instantiation
/// attempt goes back through the same checks and fails identically.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Default initial state '{state}' unknown")]
    UnknownDefaultInitialState { state: String },

    #[error("Default accepting state '{state}' unknown")]
    UnknownDefaultAcceptingState { state: String },

    #[error("The state graph contains {count} connected components: {}", format_components(.components))]
    Disconnected {
        count: usize,
        components: Vec<Vec<String>>,
    },

    #[error("Initial state '{state}' unknown")]
    UnknownInitialState { state: String },

    #[error("Accepting state '{state}' unknown")]
    UnknownAcceptingState { state: String },

    #[error("No default initial state defined for '{automaton}', must be specified in construction")]
    MissingInitialState { automaton: String },

    #[error(transparent)]
    Event(#[from] EventError),

    #[error("Event '{name}' declared more than once")]
    DuplicateEvent { name: String },

    #[error("Initial state and initial event can't be specified together")]
    ConflictingInitialization,

    #[error("Invalid automaton definition: {0}")]
    InvalidDefinition(String),
}

fn format_components(components: &[Vec<String>]) -> String {
    components
        .iter()
        .map(|c| format!("[{}]", c.join(", ")))
        .collect::<Vec<_>>()
        .join(", ")
}
