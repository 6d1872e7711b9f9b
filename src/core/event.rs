//! Event descriptors: named transition rules.

use super::error::EventError;
use super::state::{names, State};
use std::fmt;
use std::sync::OnceLock;

/// Data attached to a labeled graph edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeLabel<'a> {
    /// Name of the event the edge belongs to, `None` while unbound.
    pub event: Option<&'a str>,
}

/// A transition rule from any of a set of source states to one destination.
///
/// The event's name is not part of its construction: it is bound exactly
/// once, by the model builder, to the identifier the event is declared
/// under.
///
/// # Example
///
/// ```rust
/// use automaton::core::Event;
///
/// let go = Event::new("red", "green");
/// assert_eq!(go.source_states(), &["red"]);
/// assert_eq!(go.name(), None);
///
/// let collapse = Event::from_sources(["a", "b", "a"], "center").unwrap();
/// assert_eq!(collapse.source_states(), &["a", "b"]);
/// ```
#[derive(Clone, Debug)]
pub struct Event<S: State> {
    source_states: Vec<S>,
    dest_state: S,
    name: OnceLock<String>,
}

impl<S: State> Event<S> {
    /// Create an event with a single source state.
    pub fn new(source: S, dest: S) -> Self {
        Self {
            source_states: vec![source],
            dest_state: dest,
            name: OnceLock::new(),
        }
    }

    /// Create an event admissible from several source states.
    ///
    /// Duplicates are dropped, keeping first-seen order. Fails if no source
    /// state is given.
    pub fn from_sources<I>(sources: I, dest: S) -> Result<Self, EventError>
    where
        I: IntoIterator<Item = S>,
    {
        let mut source_states: Vec<S> = Vec::new();
        for state in sources {
            if !source_states.contains(&state) {
                source_states.push(state);
            }
        }
        if source_states.is_empty() {
            return Err(EventError::NoSourceStates);
        }
        Ok(Self {
            source_states,
            dest_state: dest,
            name: OnceLock::new(),
        })
    }

    /// The distinct source states, in declaration order.
    pub fn source_states(&self) -> &[S] {
        &self.source_states
    }

    /// The state the event leads to.
    pub fn dest_state(&self) -> &S {
        &self.dest_state
    }

    /// The name the event is declared under, `None` until bound.
    pub fn name(&self) -> Option<&str> {
        self.name.get().map(String::as_str)
    }

    /// Whether the event may fire from `state`.
    pub fn admits(&self, state: &S) -> bool {
        self.source_states.contains(state)
    }

    /// One `(source, dest)` edge per source state.
    pub fn edges(&self) -> impl Iterator<Item = (&S, &S)> + '_ {
        self.source_states
            .iter()
            .map(move |source| (source, &self.dest_state))
    }

    /// Same as [`Event::edges`], with the event name attached to every edge.
    pub fn labeled_edges(&self) -> impl Iterator<Item = (&S, &S, EdgeLabel<'_>)> + '_ {
        let label = EdgeLabel { event: self.name() };
        self.edges().map(move |(source, dest)| (source, dest, label))
    }

    /// Bind the event to its declared name. A second bind fails.
    pub(crate) fn bind(&self, name: &str) -> Result<(), EventError> {
        self.name
            .set(name.to_string())
            .map_err(|_| EventError::AlreadyBound {
                name: self.name().unwrap_or_default().to_string(),
            })
    }

    /// A fresh, unbound copy with the same sources and destination.
    pub(crate) fn unbound(&self) -> Self {
        Self {
            source_states: self.source_states.clone(),
            dest_state: self.dest_state.clone(),
            name: OnceLock::new(),
        }
    }
}

impl<S: State> fmt::Display for Event<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Event '{}': [{}] -> '{}'>",
            self.name().unwrap_or("?"),
            names(&self.source_states).join(", "),
            self.dest_state.name()
        )
    }
}
