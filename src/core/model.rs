//! The derived, immutable model of an automaton type.
//!
//! A model is produced once per automaton type by
//! [`AutomatonBuilder`](crate::builder::AutomatonBuilder) and shared,
//! read-only, by every instance of that type.

use super::error::LookupError;
use super::event::Event;
use super::state::State;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One row of the transition table: a single labeled edge of the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "S: Serialize"))]
pub struct TransitionRow<'a, S: State> {
    pub source: &'a S,
    pub dest: &'a S,
    pub event: &'a str,
}

/// States, events and the labeled multigraph derived from an automaton
/// declaration.
///
/// The graph has one edge per `(source, dest)` pair of every event, weighted
/// by the event name, so two events between the same states are two
/// parallel edges.
#[derive(Debug)]
pub struct Model<S: State> {
    pub(crate) name: String,
    pub(crate) states: Vec<S>,
    pub(crate) state_index: HashMap<S, NodeIndex>,
    pub(crate) events: Vec<Event<S>>,
    pub(crate) event_index: HashMap<String, usize>,
    pub(crate) graph: Graph<S, String>,
    pub(crate) default_initial_state: Option<S>,
    pub(crate) default_accepting_states: Option<Vec<S>>,
}

impl<S: State> Model<S> {
    /// The declared automaton type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for a declaration without events: an abstract definition that
    /// cannot be instantiated.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All states, in the order they were first discovered.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.states.iter()
    }

    /// Whether `state` appears in any declared event.
    pub fn contains_state(&self, state: &S) -> bool {
        self.state_index.contains_key(state)
    }

    /// All event names, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.iter().filter_map(Event::name)
    }

    /// Look up an event by name.
    pub fn event(&self, name: &str) -> Option<&Event<S>> {
        self.event_index.get(name).map(|&i| &self.events[i])
    }

    /// Initial state used when an instance doesn't specify one.
    pub fn default_initial_state(&self) -> Option<&S> {
        self.default_initial_state.as_ref()
    }

    /// Accepting states used when an instance doesn't specify any.
    pub fn default_accepting_states(&self) -> Option<&[S]> {
        self.default_accepting_states.as_deref()
    }

    /// The underlying multigraph, for renderers that need more than the
    /// transition table.
    pub fn graph(&self) -> &Graph<S, String> {
        &self.graph
    }

    /// Number of edges entering `state`, `None` for an unknown state.
    pub fn in_degree(&self, state: &S) -> Option<usize> {
        self.state_index
            .get(state)
            .map(|&node| self.graph.edges_directed(node, Direction::Incoming).count())
    }

    /// Events entering any of `states`, without duplicates, first-seen order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use automaton::builder::AutomatonBuilder;
    /// use automaton::core::Event;
    ///
    /// let star = AutomatonBuilder::new("Star")
    ///     .event("collapse", Event::from_sources(["a", "b"], "center").unwrap())
    ///     .event("collapse2", Event::new("f", "center"))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(star.in_events(&["center"]).unwrap(), vec!["collapse", "collapse2"]);
    /// assert!(star.in_events(&["a"]).unwrap().is_empty());
    /// assert!(star.in_events(&["nowhere"]).is_err());
    /// ```
    pub fn in_events(&self, states: &[S]) -> Result<Vec<&str>, LookupError> {
        self.cut(states, Direction::Incoming)
    }

    /// Events leaving any of `states`, without duplicates, first-seen order.
    pub fn out_events(&self, states: &[S]) -> Result<Vec<&str>, LookupError> {
        self.cut(states, Direction::Outgoing)
    }

    fn cut(&self, states: &[S], direction: Direction) -> Result<Vec<&str>, LookupError> {
        let mut unknown: Vec<String> = Vec::new();
        for state in states.iter().filter(|s| !self.contains_state(s)) {
            let name = state.name().to_string();
            if !unknown.contains(&name) {
                unknown.push(name);
            }
        }
        if !unknown.is_empty() {
            return Err(LookupError::UnknownStates { states: unknown });
        }

        let mut seen = HashSet::new();
        let mut cut = Vec::new();
        for state in states {
            let node = self.state_index[state];
            let mut edges: Vec<_> = self
                .graph
                .edges_directed(node, direction)
                .map(|edge| edge.id())
                .collect();
            // petgraph walks adjacency newest-first
            edges.sort();
            for edge in edges {
                let event = self.graph[edge].as_str();
                if seen.insert(event) {
                    cut.push(event);
                }
            }
        }
        Ok(cut)
    }

    /// The transition table, sorted by ascending inbound degree of each
    /// row's destination. Ties keep declaration order.
    pub fn transition_table(&self) -> Vec<TransitionRow<'_, S>> {
        self.transition_table_by(|row| self.in_degree(row.dest).unwrap_or_default())
    }

    /// The transition table, stably sorted by a caller-supplied key.
    pub fn transition_table_by<K, F>(&self, key: F) -> Vec<TransitionRow<'_, S>>
    where
        K: Ord,
        F: FnMut(&TransitionRow<'_, S>) -> K,
    {
        let mut rows: Vec<TransitionRow<'_, S>> = self
            .graph
            .edge_references()
            .map(|edge| TransitionRow {
                source: &self.graph[edge.source()],
                dest: &self.graph[edge.target()],
                event: self.graph[edge.id()].as_str(),
            })
            .collect();
        rows.sort_by_key(key);
        rows
    }
}
