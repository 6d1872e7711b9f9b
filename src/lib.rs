//! Automaton: a declarative finite-state machine library
//!
//! An automaton type is declared as a set of named events, each mapping one or
//! more source states to a single destination state. The library derives the
//! state set and the labeled state graph, rejects declarations whose graph is
//! not weakly connected, and runs instances that only move along declared
//! events.
//!
//! # Core Concepts
//!
//! - **State**: any opaque, hashable value via the `State` trait
//! - **Event**: a named rule from a set of source states to one destination
//! - **Model**: the immutable states/events/graph of a type, built once and
//!   shared by every instance
//! - **Automaton**: an instance tracking its current state and accepting states
//!
//! # Example
//!
//! ```rust
//! use automaton::builder::AutomatonBuilder;
//! use automaton::core::Event;
//! use automaton::runtime::{Automaton, TransitionError};
//!
//! let light = AutomatonBuilder::new("TrafficLight")
//!     .default_initial_state("red")
//!     .default_accepting_states(["red", "green"])
//!     .event("go", Event::new("red", "green"))
//!     .event("slowdown", Event::new("green", "yellow"))
//!     .event("stop", Event::new("yellow", "red"))
//!     .build()
//!     .unwrap();
//!
//! let mut crossroads = Automaton::new(&light).unwrap();
//! assert!(crossroads.is_accepted());
//!
//! crossroads.event("go").unwrap();
//! assert_eq!(crossroads.state(), &"green");
//!
//! let err = crossroads.event("stop").unwrap_err();
//! assert!(matches!(err, TransitionError::InvalidInState { .. }));
//! assert_eq!(crossroads.state(), &"green");
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod runtime;

// Re-export commonly used types
pub use crate::builder::{AutomatonBuilder, AutomatonType, Definition, DefinitionError};
pub use crate::core::{Event, EventError, Model, State};
pub use crate::error::{AutomatonError, Result};
pub use crate::runtime::{Automaton, LookupError, TransitionError};
