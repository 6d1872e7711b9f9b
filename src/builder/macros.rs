//! Macros for ergonomic automaton declarations.

/// Generate a fieldless state enum implementing [`State`](crate::core::State).
///
/// Each variant is named after itself. The enum derives `Serialize` and
/// `Deserialize`, so it can be used in declarative
/// [`Definition`](crate::builder::Definition)s; the calling crate needs
/// `serde` with the `derive` feature.
///
/// # Example
///
/// ```
/// use automaton::state_enum;
/// use automaton::core::State;
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
/// }
///
/// assert_eq!(Light::Yellow.name(), "Yellow");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
