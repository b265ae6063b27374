//! The forwarding wrapper shared by every family and both directions.
//!
//! A `Wrapper<S, K>` holds one `Arc<S>` backing object of one hierarchy and
//! implements the matching traits of the other hierarchy. The trait impls live
//! with their family in `bridge::family`; this module only defines the identity
//! contract, which is the same for every family:
//!
//! - two wrappers are equal iff they have the same concrete type (backing trait
//!   and kind marker) and their backing objects are equal
//! - the hash combines the wrapper type and the backing object's hash
//! - `Display` is the backing object's `Display`

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::base::{DynObject, Object};

/// Kind marker of a wrapper with no further specialization.
#[derive(Debug)]
pub enum Plain {}

/// Kind marker of a derived CRS wrapper that also exposes the geodetic CRS interface.
#[derive(Debug)]
pub enum DerivedGeodetic {}

/// Kind marker of a derived CRS wrapper that also exposes the geographic CRS interface.
#[derive(Debug)]
pub enum DerivedGeographic {}

/// Kind marker of a derived CRS wrapper that also exposes the vertical CRS interface.
#[derive(Debug)]
pub enum DerivedVertical {}

/// Kind marker of a derived CRS wrapper that also exposes the temporal CRS interface.
#[derive(Debug)]
pub enum DerivedTemporal {}

/// Kind marker of a derived CRS wrapper that also exposes the engineering CRS interface.
#[derive(Debug)]
pub enum DerivedEngineering {}

/// Adapter exposing a backing object of one hierarchy through the other.
///
/// `S` is the backing trait object (e.g. `dyn opengis::GeographicCrs`), `K`
/// distinguishes specialized wrappers over the same backing trait.
pub struct Wrapper<S: ?Sized, K = Plain> {
    backing: Arc<S>,
    _kind: PhantomData<fn() -> K>,
}

impl<S: ?Sized, K> Wrapper<S, K> {
    pub fn new(backing: Arc<S>) -> Self {
        Self {
            backing,
            _kind: PhantomData,
        }
    }

    /// The wrapped object.
    pub fn backing(&self) -> &Arc<S> {
        &self.backing
    }
}

impl<S: ?Sized> Wrapper<S, Plain> {
    /// Wraps `backing` in a plain wrapper.
    pub fn wrap(backing: Arc<S>) -> Arc<Self> {
        Arc::new(Self::new(backing))
    }
}

impl<S: ?Sized + DynObject, K> PartialEq for Wrapper<S, K> {
    fn eq(&self, other: &Self) -> bool {
        <S as DynObject>::dyn_eq(&self.backing, <S as DynObject>::as_dyn_object(&other.backing))
    }
}

impl<S: ?Sized + DynObject, K> Eq for Wrapper<S, K> {}

impl<S: ?Sized + DynObject, K: 'static> Hash for Wrapper<S, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        TypeId::of::<Self>().hash(state);
        <S as DynObject>::dyn_hash(&self.backing, state);
    }
}

impl<S: ?Sized + DynObject, K> fmt::Display for Wrapper<S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.backing, f)
    }
}

impl<S: ?Sized + DynObject, K> fmt::Debug for Wrapper<S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Wrapper").field(&&*self.backing).finish()
    }
}

impl<S: ?Sized + DynObject, K: 'static> Object for Wrapper<S, K> {}

/// Reports a backing object that stopped answering a facet it answered
/// when its wrapper was selected.
#[track_caller]
fn facet_lost(family: &'static str, facet: &'static str) -> ! {
    tracing::error!(family, facet, "backing object no longer exposes a resolved facet");
    panic!("{family}: backing object no longer exposes the {facet} facet");
}

/// Reports a mandatory property the backing object cannot supply.
#[track_caller]
pub(crate) fn unsupported(family: &'static str, property: &'static str) -> ! {
    tracing::error!(family, property, "mandatory property has no source value");
    panic!("{family}: the backing object has no value for mandatory property `{property}`");
}

/// Narrows the backing object of a specialized wrapper to the subtype it was
/// selected for.
///
/// The wrapper kind was chosen because the facet was present, so a missing
/// facet here is a defect of the backing object.
#[track_caller]
pub(crate) fn narrow<R: ?Sized, T: ?Sized>(
    family: &'static str,
    subtype: &'static str,
    root: Arc<R>,
    facet: impl FnOnce(Arc<R>) -> Option<Arc<T>>,
) -> Arc<T> {
    match facet(root) {
        Some(narrowed) => narrowed,
        None => facet_lost(family, subtype),
    }
}
