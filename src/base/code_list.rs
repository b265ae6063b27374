//! Open enumerations ("code lists") matched by name.
//!
//! A code list has a fixed set of predefined values plus any value a library
//! creates at runtime by name. Both hierarchies declare their own code lists
//! with [`code_list!`]; the bridge translates between them by name only.

use std::fmt;
use std::hash::Hash;

/// A value of an open enumeration, identified by its UML name.
pub trait CodeList: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// The UML identifier of this value (e.g. `"north"`).
    fn name(&self) -> &str;

    /// Returns the value named `name`, creating a non-predefined one if needed.
    fn value_of(name: &str) -> Self;

    /// The predefined values, in declaration order.
    fn values() -> &'static [Self];
}

/// Declares a code list enum with one unit variant per predefined value and an
/// `Other(String)` variant for values created by name.
///
/// ```ignore
/// code_list! {
///     /// Direction of a coordinate system axis.
///     pub enum AxisDirection {
///         North = "north",
///         East = "east",
///     }
/// }
/// ```
#[macro_export]
macro_rules! code_list {
    (
        $(#[$attr:meta])*
        pub enum $name:ident {
            $( $(#[$vattr:meta])* $variant:ident = $text:literal ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vattr])* $variant, )*
            /// A value outside the predefined set, kept by name.
            Other(String),
        }

        impl $crate::base::CodeList for $name {
            fn name(&self) -> &str {
                match self {
                    $( Self::$variant => $text, )*
                    Self::Other(name) => name,
                }
            }

            fn value_of(name: &str) -> Self {
                match name {
                    $( $text => Self::$variant, )*
                    _ => Self::Other(name.to_owned()),
                }
            }

            fn values() -> &'static [Self] {
                const VALUES: &[$name] = &[$( $name::$variant ),*];
                VALUES
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::base::CodeList::name(self))
            }
        }
    };
}
