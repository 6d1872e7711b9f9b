//! Declaration surface for automaton types.
//!
//! Types are declared either with the fluent [`AutomatonBuilder`] or from a
//! static [`Definition`] table. Both end in the same validation pass, which
//! runs once per type: an invalid declaration never produces a type to
//! instantiate.

pub mod automaton;
pub mod definition;
pub mod error;
pub mod macros;

pub use automaton::{AutomatonBuilder, AutomatonType};
pub use definition::{Definition, EventDefinition, Sources};
pub use error::DefinitionError;
