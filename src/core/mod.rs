//! Core automaton types and logic.
//!
//! This module contains the definition-time core:
//! - State values via the `State` trait
//! - Event descriptors, the named transition rules
//! - The connectivity check over the state graph
//! - The derived, immutable `Model`

mod error;
mod event;
mod graph;
mod model;
pub(crate) mod state;

pub use error::{EventError, LookupError};
pub use event::{EdgeLabel, Event};
pub use graph::{connected_components, Components};
pub use model::{Model, TransitionRow};
pub use state::State;
