//! Automaton instances bound to a shared model.

use crate::builder::{AutomatonType, DefinitionError};
use crate::core::{LookupError, Model, State};
use crate::error::AutomatonError;
use crate::runtime::error::TransitionError;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// A running automaton: a current state over a shared, immutable model.
///
/// The state only changes through [`Automaton::event`]. Instances carry no
/// synchronization; share one across threads behind your own lock.
#[derive(Clone, Debug)]
pub struct Automaton<S: State> {
    model: Arc<Model<S>>,
    state: S,
    accepting_states: HashSet<S>,
}

impl<S: State> Automaton<S> {
    /// Create an instance using the type's default initial and accepting
    /// states.
    pub fn new(ty: &AutomatonType<S>) -> Result<Self, DefinitionError> {
        resolve(Arc::clone(ty.model()), None, None)
    }

    /// The model shared by every instance of this type.
    pub fn model(&self) -> &Model<S> {
        &self.model
    }

    /// Get current state (pure)
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Accepting states of this instance (pure)
    pub fn accepting_states(&self) -> &HashSet<S> {
        &self.accepting_states
    }

    /// Whether the current state is an accepting state.
    pub fn is_accepted(&self) -> bool {
        self.accepting_states.contains(&self.state)
    }

    /// Whether `event` could fire from the current state (pure).
    pub fn can_fire(&self, event: &str) -> bool {
        self.model
            .event(event)
            .is_some_and(|e| e.admits(&self.state))
    }

    /// Events that may fire from the current state.
    pub fn available_events(&self) -> Vec<&str> {
        self.model
            .out_events(std::slice::from_ref(&self.state))
            .unwrap_or_default()
    }

    /// Fire `event`, moving to its destination state.
    ///
    /// The event must exist and list the current state among its sources;
    /// otherwise the state is left untouched.
    pub fn event(&mut self, event: &str) -> Result<&S, TransitionError> {
        let transition = self
            .model
            .event(event)
            .ok_or_else(|| TransitionError::UnknownEvent {
                event: event.to_string(),
            })?;
        if !transition.admits(&self.state) {
            return Err(TransitionError::InvalidInState {
                event: event.to_string(),
                state: self.state.name().to_string(),
            });
        }
        let dest = transition.dest_state().clone();
        tracing::trace!(
            automaton = %self.model.name(),
            event,
            from = %self.state.name(),
            to = %dest.name(),
            "transition"
        );
        self.state = dest;
        Ok(&self.state)
    }

    /// See [`Model::in_events`].
    pub fn in_events(&self, states: &[S]) -> Result<Vec<&str>, LookupError> {
        self.model.in_events(states)
    }

    /// See [`Model::out_events`].
    pub fn out_events(&self, states: &[S]) -> Result<Vec<&str>, LookupError> {
        self.model.out_events(states)
    }
}

impl<S: State> fmt::Display for Automaton<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}@{}>", self.model.name(), self.state.name())
    }
}

/// How the initial state of a new instance is chosen.
#[derive(Clone, Debug)]
enum Initial<S> {
    Default,
    State(S),
    Event(String),
}

/// Builder for automaton instances.
///
/// # Example
///
/// ```rust
/// use automaton::builder::AutomatonBuilder;
/// use automaton::core::Event;
///
/// let light = AutomatonBuilder::new("TrafficLight")
///     .event("go", Event::new("red", "green"))
///     .event("slowdown", Event::new("green", "yellow"))
///     .event("stop", Event::new("yellow", "red"))
///     .build()
///     .unwrap();
///
/// let crossroads = light
///     .instance()
///     .initial_state("yellow")
///     .accepting_states(["red"])
///     .build()
///     .unwrap();
/// assert_eq!(crossroads.state(), &"yellow");
/// assert!(!crossroads.is_accepted());
/// ```
pub struct InstanceBuilder<S: State> {
    model: Arc<Model<S>>,
    initial: Initial<S>,
    accepting: Option<Vec<S>>,
    conflict: bool,
}

impl<S: State> InstanceBuilder<S> {
    pub(crate) fn new(model: Arc<Model<S>>) -> Self {
        Self {
            model,
            initial: Initial::Default,
            accepting: None,
            conflict: false,
        }
    }

    /// Start in `state` instead of the type's default.
    pub fn initial_state(mut self, state: S) -> Self {
        self.conflict |= matches!(self.initial, Initial::Event(_));
        self.initial = Initial::State(state);
        self
    }

    /// Start in the destination state of `event`.
    ///
    /// Mutually exclusive with [`InstanceBuilder::initial_state`].
    pub fn initial_event(mut self, event: impl Into<String>) -> Self {
        self.conflict |= matches!(self.initial, Initial::State(_));
        self.initial = Initial::Event(event.into());
        self
    }

    /// Use these accepting states instead of the type's defaults.
    pub fn accepting_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.accepting = Some(states.into_iter().collect());
        self
    }

    /// Resolve the initial and accepting states and create the instance.
    pub fn build(self) -> Result<Automaton<S>, AutomatonError> {
        if self.conflict {
            return Err(DefinitionError::ConflictingInitialization.into());
        }
        let initial = match self.initial {
            Initial::Default => None,
            Initial::State(state) => Some(state),
            Initial::Event(name) => {
                let event = self
                    .model
                    .event(&name)
                    .ok_or(TransitionError::UnknownEvent { event: name.clone() })?;
                Some(event.dest_state().clone())
            }
        };
        Ok(resolve(self.model, initial, self.accepting)?)
    }
}

fn resolve<S: State>(
    model: Arc<Model<S>>,
    initial: Option<S>,
    accepting: Option<Vec<S>>,
) -> Result<Automaton<S>, DefinitionError> {
    let state = match initial.or_else(|| model.default_initial_state().cloned()) {
        Some(state) => state,
        None => {
            return Err(DefinitionError::MissingInitialState {
                automaton: model.name().to_string(),
            })
        }
    };
    if !model.contains_state(&state) {
        return Err(DefinitionError::UnknownInitialState {
            state: state.name().to_string(),
        });
    }

    let accepting = accepting
        .or_else(|| model.default_accepting_states().map(<[S]>::to_vec))
        .unwrap_or_default();
    if let Some(unknown) = accepting.iter().find(|s| !model.contains_state(s)) {
        return Err(DefinitionError::UnknownAcceptingState {
            state: unknown.name().to_string(),
        });
    }

    tracing::debug!(automaton = %model.name(), initial = %state.name(), "created automaton");

    Ok(Automaton {
        model,
        state,
        accepting_states: accepting.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AutomatonBuilder;
    use crate::core::Event;

    fn traffic_light() -> AutomatonType<&'static str> {
        AutomatonBuilder::new("TrafficLight")
            .default_initial_state("red")
            .default_accepting_states(["red", "green"])
            .event("go", Event::new("red", "green"))
            .event("slowdown", Event::new("green", "yellow"))
            .event("stop", Event::new("yellow", "red"))
            .build()
            .unwrap()
    }

    fn no_init() -> AutomatonType<&'static str> {
        AutomatonBuilder::new("NoInit")
            .event("event1", Event::new("state_a", "state_b"))
            .event("event2", Event::new("state_b", "state_c"))
            .build()
            .unwrap()
    }

    #[test]
    fn transitions_follow_events() {
        let mut crossroads = Automaton::new(&traffic_light()).unwrap();
        assert_eq!(crossroads.state(), &"red");
        crossroads.event("go").unwrap();
        assert_eq!(crossroads.state(), &"green");
        crossroads.event("slowdown").unwrap();
        assert_eq!(crossroads.state(), &"yellow");
        crossroads.event("stop").unwrap();
        assert_eq!(crossroads.state(), &"red");
        assert_eq!(crossroads.event("go"), Ok(&"green"));
    }

    #[test]
    fn invalid_transition_leaves_state_unchanged() {
        let mut crossroads = Automaton::new(&traffic_light()).unwrap();
        crossroads.event("go").unwrap();

        let err = crossroads.event("stop").unwrap_err();
        assert_eq!(
            err,
            TransitionError::InvalidInState {
                event: "stop".to_string(),
                state: "green".to_string()
            }
        );
        assert_eq!(crossroads.state(), &"green");

        let err = crossroads.event("unknown").unwrap_err();
        assert!(matches!(err, TransitionError::UnknownEvent { .. }));
        assert_eq!(crossroads.state(), &"green");
    }

    #[test]
    fn default_accepting_states_apply() {
        let mut crossroads = Automaton::new(&traffic_light()).unwrap();
        assert!(crossroads.is_accepted());
        crossroads.event("go").unwrap();
        assert!(crossroads.is_accepted());
        crossroads.event("slowdown").unwrap();
        assert!(!crossroads.is_accepted());
        crossroads.event("stop").unwrap();
        assert!(crossroads.is_accepted());
    }

    #[test]
    fn custom_accepting_states_take_precedence() {
        let mut crossroads = traffic_light()
            .instance()
            .accepting_states(["yellow"])
            .build()
            .unwrap();
        assert!(!crossroads.is_accepted());
        crossroads.event("go").unwrap();
        assert!(!crossroads.is_accepted());
        crossroads.event("slowdown").unwrap();
        assert!(crossroads.is_accepted());
    }

    #[test]
    fn unknown_accepting_state_fails() {
        let result = traffic_light()
            .instance()
            .accepting_states(["yellow", "unknown"])
            .build();
        assert_eq!(
            result.unwrap_err(),
            AutomatonError::Definition(DefinitionError::UnknownAcceptingState {
                state: "unknown".to_string()
            })
        );
    }

    #[test]
    fn no_accepting_states_means_never_accepted() {
        let auto = no_init().instance().initial_state("state_a").build().unwrap();
        assert!(auto.accepting_states().is_empty());
        assert!(!auto.is_accepted());
    }

    #[test]
    fn missing_initial_state_fails() {
        let err = Automaton::new(&no_init()).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::MissingInitialState {
                automaton: "NoInit".to_string()
            }
        );
    }

    #[test]
    fn explicit_initial_state_is_validated() {
        let ty = no_init();
        let result = ty.instance().initial_state("unknown").build();
        assert!(matches!(
            result,
            Err(AutomatonError::Definition(DefinitionError::UnknownInitialState { .. }))
        ));
        for state in ["state_a", "state_b", "state_c"] {
            let auto = ty.instance().initial_state(state).build().unwrap();
            assert_eq!(auto.state(), &state);
            assert_eq!(auto.model().default_initial_state(), None);
        }
    }

    #[test]
    fn initial_event_picks_its_destination() {
        let auto = traffic_light().instance().initial_event("slowdown").build().unwrap();
        assert_eq!(auto.state(), &"yellow");
    }

    #[test]
    fn unknown_initial_event_fails() {
        let result = traffic_light().instance().initial_event("fly").build();
        assert_eq!(
            result.unwrap_err(),
            AutomatonError::Transition(TransitionError::UnknownEvent {
                event: "fly".to_string()
            })
        );
    }

    #[test]
    fn initial_state_and_event_conflict() {
        let result = traffic_light()
            .instance()
            .initial_state("red")
            .initial_event("go")
            .build();
        assert_eq!(
            result.unwrap_err(),
            AutomatonError::Definition(DefinitionError::ConflictingInitialization)
        );
    }

    #[test]
    fn empty_type_cannot_be_instantiated() {
        let empty = AutomatonBuilder::<&'static str>::new("Empty").build().unwrap();
        assert!(Automaton::new(&empty).is_err());
        assert!(empty.instance().initial_state("a").build().is_err());
    }

    #[test]
    fn multi_source_event_collapses_once() {
        let sources = ["state_a", "state_b", "state_c", "state_d", "state_e"];
        let star = AutomatonBuilder::new("Star")
            .event("collapse", Event::from_sources(sources, "center").unwrap())
            .build()
            .unwrap();

        for initial in sources {
            let mut auto = star.instance().initial_state(initial).build().unwrap();
            auto.event("collapse").unwrap();
            assert_eq!(auto.state(), &"center");
            assert!(auto.event("collapse").is_err());
            assert_eq!(auto.state(), &"center");
        }
    }

    #[test]
    fn sink_loop_cycles() {
        let sink = AutomatonBuilder::new("Sink")
            .event("event1", Event::new("state_a", "state_b"))
            .event(
                "event2",
                Event::from_sources(["state_a", "state_b", "state_c", "state_d"], "sink1").unwrap(),
            )
            .event(
                "event3",
                Event::from_sources(["state_a", "state_b", "state_c", "state_d", "sink1"], "sink2")
                    .unwrap(),
            )
            .event("event4", Event::new("sink2", "state_a"))
            .build()
            .unwrap();

        let mut auto = sink.instance().initial_state("state_a").build().unwrap();
        for _ in 0..2 {
            auto.event("event1").unwrap();
            assert_eq!(auto.state(), &"state_b");
            auto.event("event2").unwrap();
            assert_eq!(auto.state(), &"sink1");
            auto.event("event3").unwrap();
            assert_eq!(auto.state(), &"sink2");
            auto.event("event4").unwrap();
            assert_eq!(auto.state(), &"state_a");
        }
    }

    #[test]
    fn can_fire_and_available_events() {
        let mut crossroads = Automaton::new(&traffic_light()).unwrap();
        assert!(crossroads.can_fire("go"));
        assert!(!crossroads.can_fire("stop"));
        assert!(!crossroads.can_fire("unknown"));
        assert_eq!(crossroads.available_events(), vec!["go"]);
        crossroads.event("go").unwrap();
        assert_eq!(crossroads.available_events(), vec!["slowdown"]);
    }

    #[test]
    fn instances_share_one_model() {
        let ty = traffic_light();
        let first = Automaton::new(&ty).unwrap();
        let mut second = Automaton::new(&ty).unwrap();
        second.event("go").unwrap();

        assert!(std::ptr::eq(first.model(), second.model()));
        assert_eq!(first.state(), &"red");
        assert_eq!(second.state(), &"green");
    }

    #[test]
    fn display_shows_type_and_state() {
        let mut crossroads = Automaton::new(&traffic_light()).unwrap();
        assert_eq!(crossroads.to_string(), "<TrafficLight@red>");
        crossroads.event("go").unwrap();
        assert_eq!(crossroads.to_string(), "<TrafficLight@green>");
    }

    #[test]
    fn cut_queries_through_instance() {
        let crossroads = Automaton::new(&traffic_light()).unwrap();
        assert_eq!(crossroads.in_events(&["red"]).unwrap(), vec!["stop"]);
        assert_eq!(crossroads.out_events(&["red"]).unwrap(), vec!["go"]);
    }
}
