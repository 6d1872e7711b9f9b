//! Declarative automaton definitions loaded from JSON or TOML.
//!
//! A definition is a static table of events plus the type's defaults. It is
//! turned into an [`AutomatonType`] by the same [`AutomatonBuilder`] used for
//! hand-written declarations, so every check applies unchanged.
//!
//! ```json
//! {
//!   "name": "TrafficLight",
//!   "default_initial_state": "red",
//!   "default_accepting_states": ["red", "green"],
//!   "events": [
//!     { "name": "go", "source": "red", "dest": "green" },
//!     { "name": "slowdown", "source": "green", "dest": "yellow" },
//!     { "name": "stop", "source": "yellow", "dest": "red" }
//!   ]
//! }
//! ```

use crate::builder::automaton::{AutomatonBuilder, AutomatonType};
use crate::builder::error::DefinitionError;
use crate::core::{Event, State};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Source states of a declared event: one state, or a list of them.
///
/// A single string is always one state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sources<S> {
    One(S),
    Many(Vec<S>),
}

/// One declared event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDefinition<S> {
    pub name: String,
    pub source: Sources<S>,
    pub dest: S,
}

/// A complete automaton type declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "S: Deserialize<'de>"))]
pub struct Definition<S> {
    pub name: String,

    #[serde(default)]
    pub default_initial_state: Option<S>,

    #[serde(default)]
    pub default_accepting_states: Option<Vec<S>>,

    #[serde(default)]
    pub events: Vec<EventDefinition<S>>,
}

impl<S: State + DeserializeOwned> Definition<S> {
    /// Parse a definition from JSON.
    pub fn from_json(input: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(input).map_err(|e| DefinitionError::InvalidDefinition(e.to_string()))
    }

    /// Parse a definition from TOML.
    pub fn from_toml(input: &str) -> Result<Self, DefinitionError> {
        toml::from_str(input).map_err(|e| DefinitionError::InvalidDefinition(e.to_string()))
    }
}

impl<S: State> Definition<S> {
    /// Build and validate the declared automaton type.
    pub fn build(self) -> Result<AutomatonType<S>, DefinitionError> {
        let mut builder = AutomatonBuilder::new(self.name);
        if let Some(state) = self.default_initial_state {
            builder = builder.default_initial_state(state);
        }
        if let Some(states) = self.default_accepting_states {
            builder = builder.default_accepting_states(states);
        }
        for event in self.events {
            let declared = match event.source {
                Sources::One(source) => Event::new(source, event.dest),
                Sources::Many(sources) => Event::from_sources(sources, event.dest)?,
            };
            builder = builder.event(event.name, declared);
        }
        builder.build()
    }
}
