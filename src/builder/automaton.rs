//! Builder for declaring automaton types.

use crate::builder::error::DefinitionError;
use crate::core::state::names;
use crate::core::{connected_components, Event, Model, State};
use crate::runtime::InstanceBuilder;
use petgraph::graph::Graph;
use std::collections::{HashMap, HashSet};
use std::iter;
use std::ops::Deref;
use std::sync::Arc;

/// A validated automaton type.
///
/// Cloning is cheap: every clone, and every instance created from it, shares
/// the same immutable [`Model`].
#[derive(Clone, Debug)]
pub struct AutomatonType<S: State> {
    model: Arc<Model<S>>,
}

impl<S: State> AutomatonType<S> {
    /// The shared model of this type.
    pub fn model(&self) -> &Arc<Model<S>> {
        &self.model
    }

    /// Start configuring a new instance of this type.
    pub fn instance(&self) -> InstanceBuilder<S> {
        InstanceBuilder::new(Arc::clone(&self.model))
    }
}

impl<S: State> Deref for AutomatonType<S> {
    type Target = Model<S>;

    fn deref(&self) -> &Model<S> {
        &self.model
    }
}

/// Builder for declaring automaton types with a fluent API.
///
/// Declaration problems are collected while chaining and reported by
/// [`AutomatonBuilder::build`], which also runs every structural check.
///
/// # Example
///
/// ```rust
/// use automaton::builder::AutomatonBuilder;
/// use automaton::core::Event;
///
/// let light = AutomatonBuilder::new("TrafficLight")
///     .default_initial_state("red")
///     .default_accepting_states(["red", "green"])
///     .event("go", Event::new("red", "green"))
///     .event("slowdown", Event::new("green", "yellow"))
///     .event("stop", Event::new("yellow", "red"))
///     .build()
///     .unwrap();
///
/// assert_eq!(light.events().collect::<Vec<_>>(), vec!["go", "slowdown", "stop"]);
/// ```
pub struct AutomatonBuilder<S: State> {
    name: String,
    declared: Vec<(String, Event<S>)>,
    inherited: HashSet<String>,
    default_initial: Option<S>,
    default_accepting: Option<Vec<S>>,
    error: Option<DefinitionError>,
}

impl<S: State> AutomatonBuilder<S> {
    /// Create a new builder for a type called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared: Vec::new(),
            inherited: HashSet::new(),
            default_initial: None,
            default_accepting: None,
            error: None,
        }
    }

    /// Create a builder that starts from the events and defaults of `base`.
    ///
    /// Each inherited event may be redeclared once to override it.
    pub fn extending(name: impl Into<String>, base: &AutomatonType<S>) -> Self {
        let declared: Vec<(String, Event<S>)> = base
            .events
            .iter()
            .filter_map(|event| event.name().map(|n| (n.to_string(), event.unbound())))
            .collect();
        Self {
            name: name.into(),
            inherited: declared.iter().map(|(n, _)| n.clone()).collect(),
            declared,
            default_initial: base.default_initial_state.clone(),
            default_accepting: base.default_accepting_states.clone(),
            error: None,
        }
    }

    /// Declare an event under `name`.
    pub fn event(mut self, name: impl Into<String>, event: Event<S>) -> Self {
        let name = name.into();
        match self.declared.iter().position(|(declared, _)| *declared == name) {
            Some(index) if self.inherited.remove(&name) => self.declared[index].1 = event,
            Some(_) => {
                if self.error.is_none() {
                    self.error = Some(DefinitionError::DuplicateEvent { name });
                }
            }
            None => self.declared.push((name, event)),
        }
        self
    }

    /// Declare several events at once.
    pub fn events<I, N>(self, events: I) -> Self
    where
        I: IntoIterator<Item = (N, Event<S>)>,
        N: Into<String>,
    {
        events
            .into_iter()
            .fold(self, |builder, (name, event)| builder.event(name, event))
    }

    /// Set the initial state used when an instance doesn't specify one.
    pub fn default_initial_state(mut self, state: S) -> Self {
        self.default_initial = Some(state);
        self
    }

    /// Set the accepting states used when an instance doesn't specify any.
    pub fn default_accepting_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.default_accepting = Some(states.into_iter().collect());
        self
    }

    /// Derive and validate the model.
    ///
    /// A declaration without events yields an empty, abstract type and skips
    /// every structural check. Otherwise the defaults must name known states
    /// and the state graph must be weakly connected.
    pub fn build(self) -> Result<AutomatonType<S>, DefinitionError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let mut states = Vec::new();
        let mut state_index = HashMap::new();
        let mut graph = Graph::new();
        let mut events = Vec::with_capacity(self.declared.len());
        let mut event_index = HashMap::new();

        for (name, event) in self.declared {
            event.bind(&name)?;
            for state in event.source_states().iter().chain(iter::once(event.dest_state())) {
                if !state_index.contains_key(state) {
                    state_index.insert(state.clone(), graph.add_node(state.clone()));
                    states.push(state.clone());
                }
            }
            event_index.insert(name, events.len());
            events.push(event);
        }

        let mut model = Model {
            name: self.name,
            states,
            state_index,
            events,
            event_index,
            graph,
            default_initial_state: self.default_initial,
            default_accepting_states: self.default_accepting,
        };

        if model.is_empty() {
            tracing::debug!(automaton = %model.name, "declared abstract automaton without events");
            return Ok(AutomatonType {
                model: Arc::new(model),
            });
        }

        validate_defaults(&model)?;

        for event in &model.events {
            let dest = model.state_index[event.dest_state()];
            for (source, _, label) in event.labeled_edges() {
                let event_name = label.event.unwrap_or_default().to_string();
                model
                    .graph
                    .add_edge(model.state_index[source], dest, event_name);
            }
        }

        let components = connected_components(
            model
                .events
                .iter()
                .map(|event| (event.source_states(), event.dest_state())),
        );
        if !components.is_connected() {
            return Err(DefinitionError::Disconnected {
                count: components.len(),
                components: components
                    .groups()
                    .iter()
                    .map(|group| names(group.iter().copied()))
                    .collect(),
            });
        }

        tracing::debug!(
            automaton = %model.name,
            states = model.states.len(),
            events = model.events.len(),
            "built automaton model"
        );

        Ok(AutomatonType {
            model: Arc::new(model),
        })
    }
}

fn validate_defaults<S: State>(model: &Model<S>) -> Result<(), DefinitionError> {
    if let Some(state) = model.default_initial_state() {
        if !model.contains_state(state) {
            return Err(DefinitionError::UnknownDefaultInitialState {
                state: state.name().to_string(),
            });
        }
    }
    if let Some(accepting) = model.default_accepting_states() {
        if let Some(state) = accepting.iter().find(|s| !model.contains_state(s)) {
            return Err(DefinitionError::UnknownDefaultAcceptingState {
                state: state.name().to_string(),
            });
        }
    }
    Ok(())
}
