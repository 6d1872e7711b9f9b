//! Umbrella error type for every failure the library reports.

use crate::builder::DefinitionError;
use crate::core::{EventError, LookupError};
use crate::runtime::TransitionError;
use thiserror::Error;

/// Any error occurred in the automaton.
///
/// Each kind is raised in one place only: definition errors while building
/// types and instances, transition errors from firing events, lookup errors
/// from cut queries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl From<EventError> for AutomatonError {
    fn from(err: EventError) -> Self {
        Self::Definition(err.into())
    }
}

pub type Result<T, E = AutomatonError> = std::result::Result<T, E>;
