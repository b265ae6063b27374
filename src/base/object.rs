//! Object root shared by both hierarchies.
//!
//! Trait objects cannot derive `PartialEq` or `Hash`, and Rust has no runtime
//! "does this value implement trait X" query. [`DynObject`] covers the first
//! gap with type-erased equality; [`Object::native_view`] covers the second for
//! the rare types that implement interfaces of both hierarchies.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Type-erased identity operations, implemented for every `Eq + Hash` type.
///
/// Two values are `dyn_eq` only if they have the same concrete type and compare
/// equal under that type's `PartialEq`.
pub trait DynObject: Any + Send + Sync + fmt::Debug + fmt::Display {
    /// The value as `&dyn Any`, for concrete type tests.
    fn as_any(&self) -> &dyn Any;

    /// The value as `&dyn DynObject`.
    fn as_dyn_object(&self) -> &dyn DynObject;

    /// Equality across trait objects.
    fn dyn_eq(&self, other: &dyn DynObject) -> bool;

    /// Feeds the concrete type and the value into `state`.
    fn dyn_hash(&self, state: &mut dyn Hasher);
}

impl<T> DynObject for T
where
    T: Any + Send + Sync + fmt::Debug + fmt::Display + Eq + Hash,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_dyn_object(&self) -> &dyn DynObject {
        self
    }

    fn dyn_eq(&self, other: &dyn DynObject) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }
}

/// Root of every trait in both hierarchies.
///
/// Implementors only write `impl Object for MyType {}` unless the type natively
/// implements interfaces from the other hierarchy, in which case it overrides
/// [`Object::native_view`].
pub trait Object: DynObject {
    /// Returns this object as the trait object whose `Arc` type id is `target`,
    /// if the concrete type implements that trait itself.
    ///
    /// ```ignore
    /// fn native_view(self: Arc<Self>, target: TypeId) -> Option<View> {
    ///     View::offer::<dyn geoapi::CoordinateReferenceSystem>(target, move || {
    ///         self as Arc<dyn geoapi::CoordinateReferenceSystem>
    ///     })
    /// }
    /// ```
    fn native_view(self: Arc<Self>, target: TypeId) -> Option<View> {
        let _ = target;
        None
    }
}

/// A type-erased `Arc<dyn Trait>` returned by [`Object::native_view`].
pub struct View(Box<dyn Any + Send + Sync>);

impl View {
    /// Offers `view` if `target` names `Arc<T>`.
    pub fn offer<T>(target: TypeId, view: impl FnOnce() -> Arc<T>) -> Option<View>
    where
        T: ?Sized + 'static,
        Arc<T>: Send + Sync,
    {
        (target == TypeId::of::<Arc<T>>()).then(|| View(Box::new(view())))
    }

    /// Recovers the offered `Arc<T>`.
    pub fn downcast<T>(self) -> Option<Arc<T>>
    where
        T: ?Sized + 'static,
    {
        self.0.downcast::<Arc<T>>().ok().map(|view| *view)
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("View")
    }
}

/// Asks `object` for a native `Arc<T>` view of itself.
pub fn native_view<T, S>(object: &Arc<S>) -> Option<Arc<T>>
where
    T: ?Sized + 'static,
    S: ?Sized + Object,
{
    Arc::clone(object)
        .native_view(TypeId::of::<Arc<T>>())?
        .downcast::<T>()
}
