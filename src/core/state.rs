//! Core State trait for automaton states.
//!
//! States are opaque values: the automaton only ever compares and hashes
//! them. The trait adds a name used in diagnostics and `Display` output.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// States carry no structure beyond equality and identity. They are
/// discovered from the declared events when a model is built and are never
/// created or destroyed afterwards.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the derived model and into instances
/// - `Eq` + `Hash`: states are members of sets and map keys
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: models are shared across threads read-only
///
/// # Example
///
/// ```rust
/// use automaton::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert_eq!("red".name(), "red");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display and error reporting.
    fn name(&self) -> &str;
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// Render a list of states as `[a, b, c]` using their names.
pub(crate) fn names<'a, S: State>(states: impl IntoIterator<Item = &'a S>) -> Vec<String> {
    states.into_iter().map(|s| s.name().to_string()).collect()
}
