//! Per-family resolver tables.
//!
//! Each family declares one [`Dispatch`] per direction. Resolution runs in a
//! fixed order:
//!
//! 1. the object natively implements the target trait: returned unchanged
//! 2. the object is a wrapper made by the reverse direction: its backing
//!    object is returned
//! 3. otherwise the [`SubtypeTable`] picks the most specific wrapper
//!
//! Resolution never fails. An object matching none of the declared subtypes
//! gets the family's generic wrapper.

use std::any::Any;
use std::sync::Arc;

use tracing::trace;

use crate::base::{DynObject, Object, native_view};

/// One candidate subtype: its name and the constructor that wraps the object
/// when it exposes that subtype's facet.
pub struct Subtype<S: ?Sized, T: ?Sized> {
    pub name: &'static str,
    pub wrap: fn(&Arc<S>) -> Option<Arc<T>>,
}

/// Declared subtypes of a family, from least to most specific.
pub struct SubtypeTable<S: ?Sized + 'static, T: ?Sized + 'static> {
    pub subtypes: &'static [Subtype<S, T>],
    /// Wrapper used when no subtype matches.
    pub generic: fn(Arc<S>) -> Arc<T>,
}

impl<S: ?Sized + 'static, T: ?Sized + 'static> SubtypeTable<S, T> {
    /// Wraps `object` with the most specific matching subtype.
    ///
    /// Candidates are tried from the most specific end, which is the same as
    /// testing all of them in declaration order and keeping the last match.
    pub fn select(&self, object: &Arc<S>) -> (&'static str, Arc<T>) {
        self.subtypes
            .iter()
            .rev()
            .find_map(|subtype| (subtype.wrap)(object).map(|target| (subtype.name, target)))
            .unwrap_or_else(|| (GENERIC, (self.generic)(Arc::clone(object))))
    }
}

/// Name reported for the generic family wrapper.
pub const GENERIC: &str = "generic";

/// How an object was resolved.
pub enum Resolution<T: ?Sized> {
    /// The object already implemented the target trait.
    PassThrough(Arc<T>),
    /// The object was a reverse wrapper; this is its backing object.
    Unwrapped(Arc<T>),
    /// A new wrapper for the named subtype.
    Wrapped { subtype: &'static str, target: Arc<T> },
}

impl<T: ?Sized> Resolution<T> {
    pub fn into_target(self) -> Arc<T> {
        match self {
            Self::PassThrough(target) | Self::Unwrapped(target) => target,
            Self::Wrapped { target, .. } => target,
        }
    }

    /// The selected subtype, for new wrappers.
    pub fn subtype(&self) -> Option<&'static str> {
        match self {
            Self::Wrapped { subtype, .. } => Some(*subtype),
            Self::PassThrough(_) | Self::Unwrapped(_) => None,
        }
    }
}

/// Resolver for one family in one direction.
pub struct Dispatch<S: ?Sized + 'static, T: ?Sized + 'static> {
    pub family: &'static str,
    /// Recovers the backing object of the reverse direction's wrappers,
    /// by concrete type test only.
    pub unwrap: fn(&dyn Any) -> Option<Arc<T>>,
    pub table: SubtypeTable<S, T>,
}

impl<S, T> Dispatch<S, T>
where
    S: ?Sized + Object + 'static,
    T: ?Sized + 'static,
{
    pub fn resolution(&self, object: &Arc<S>) -> Resolution<T> {
        if let Some(native) = native_view::<T, S>(object) {
            trace!(family = self.family, "pass-through");
            return Resolution::PassThrough(native);
        }

        if let Some(backing) = (self.unwrap)(<S as DynObject>::as_any(object)) {
            trace!(family = self.family, "unwrapped");
            return Resolution::Unwrapped(backing);
        }

        let (subtype, target) = self.table.select(object);
        trace!(family = self.family, subtype, "wrapped");
        Resolution::Wrapped { subtype, target }
    }

    /// Adapts `object` to the target hierarchy.
    pub fn adapt(&self, object: &Arc<S>) -> Arc<T> {
        self.resolution(object).into_target()
    }

    /// Like [`Dispatch::adapt`], with `None` mapped to `None`.
    pub fn resolve(&self, object: Option<&Arc<S>>) -> Option<Arc<T>> {
        object.map(|object| self.adapt(object))
    }
}
