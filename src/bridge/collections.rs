//! Container and code-list translators.
//!
//! Element translation is always a closure supplied by the caller, usually one
//! of the facade functions, so these helpers know nothing about families.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::base::CodeList;

/// Translates a sequence, keeping its order.
pub fn lift_vec<S, T>(items: &[S], lift: impl FnMut(&S) -> T) -> Vec<T> {
    items.iter().map(lift).collect()
}

/// Translates a set. Elements that translate to equal values collapse.
pub fn lift_set<S, T>(items: &IndexSet<S>, lift: impl FnMut(&S) -> T) -> IndexSet<T>
where
    T: Eq + Hash,
{
    items.iter().map(lift).collect()
}

/// Translates an optional set; `None` stays `None` rather than becoming empty.
pub fn lift_set_opt<S, T>(items: Option<&IndexSet<S>>, lift: impl FnMut(&S) -> T) -> Option<IndexSet<T>>
where
    T: Eq + Hash,
{
    items.map(|items| lift_set(items, lift))
}

/// Translates the keys and values of a map independently.
pub fn lift_map<K, V, K2, V2>(
    map: &IndexMap<K, V>,
    mut key: impl FnMut(&K) -> K2,
    mut value: impl FnMut(&V) -> V2,
) -> IndexMap<K2, V2>
where
    K2: Eq + Hash,
{
    map.iter().map(|(k, v)| (key(k), value(v))).collect()
}

/// Translates a code-list value by name.
///
/// A name the target list does not predefine becomes a runtime value of that
/// list, as the target's own `value_of` would create it.
pub fn translate_code<S: CodeList, T: CodeList>(code: &S) -> T {
    T::value_of(code.name())
}

/// Translates a set of code-list values by name.
pub fn translate_codes<S: CodeList, T: CodeList>(codes: &IndexSet<S>) -> IndexSet<T> {
    lift_set(codes, translate_code)
}
