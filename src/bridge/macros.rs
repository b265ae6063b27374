//! Declaration helpers for resolver tables and facade impls.

/// Declares one [`Subtype`](crate::bridge::Subtype) candidate.
///
/// The candidate expression evaluates to `Option<Arc<W>>` for some wrapper
/// `W` implementing the target trait; `None` means the object lacks the
/// subtype's facet.
///
/// ```ignore
/// subtype!(dyn opengis::Datum => dyn geoapi::Datum, "vertical", |datum| {
///     Arc::clone(datum).as_vertical().map(Wrapper::wrap)
/// })
/// ```
macro_rules! subtype {
    ($source:ty => $target:ty, $name:literal, |$object:ident| $candidate:expr) => {
        $crate::bridge::Subtype::<$source, $target> {
            name: $name,
            wrap: {
                fn wrap($object: &std::sync::Arc<$source>) -> Option<std::sync::Arc<$target>> {
                    let found: std::sync::Arc<$target> = $candidate?;
                    Some(found)
                }
                wrap
            },
        }
    };
}

/// The generic wrapper constructor of a [`SubtypeTable`](crate::bridge::SubtypeTable).
macro_rules! plain_wrapper {
    ($source:ty => $target:ty) => {{
        fn wrap(object: std::sync::Arc<$source>) -> std::sync::Arc<$target> {
            $crate::bridge::Wrapper::wrap(object)
        }
        wrap
    }};
}

/// Declares the reverse-wrapper test of a [`Dispatch`](crate::bridge::Dispatch).
///
/// Lists every wrapper type the opposite direction produces for the family;
/// an object of one of those exact types yields its backing object.
macro_rules! unwrap_wrappers {
    ($target:ty: $($wrapper:ty),+ $(,)?) => {{
        fn unwrap(any: &dyn std::any::Any) -> Option<std::sync::Arc<$target>> {
            $(
                if let Some(wrapper) = any.downcast_ref::<$wrapper>() {
                    let backing = std::sync::Arc::clone(wrapper.backing());
                    let backing: std::sync::Arc<$target> = backing;
                    return Some(backing);
                }
            )+
            None
        }
        unwrap
    }};
}

/// Wraps a facet of the backing object in a plain wrapper, for the `as_*`
/// methods of wrappers.
macro_rules! forward_facet {
    ($self:ident.$facet:ident) => {
        Some($crate::bridge::Wrapper::wrap(
            std::sync::Arc::clone($self.backing()).$facet()?,
        ))
    };
}

/// Implements a facade trait for one source trait object.
///
/// Family roots adapt through their [`Dispatch`](crate::bridge::Dispatch).
/// Subtypes first check for a native view and for a reverse wrapper of the
/// same subtype. Otherwise they upcast to the root, adapt, and narrow back
/// through `$facet`. An object that does not answer `$facet` gets a plain
/// wrapper of its declared subtype.
macro_rules! facade {
    ($facade:ident: $source:ty => $target:ty, via $root:ty, $dispatch:expr, $facet:ident) => {
        impl $facade for $source {
            type Target = $target;

            fn adapt(object: &std::sync::Arc<Self>) -> std::sync::Arc<$target> {
                if let Some(native) = $crate::base::native_view::<$target, $source>(object) {
                    return native;
                }
                let any = <$source as $crate::base::DynObject>::as_any(&**object);
                if let Some(wrapper) = any.downcast_ref::<$crate::bridge::Wrapper<$target, $crate::bridge::Plain>>() {
                    return std::sync::Arc::clone(wrapper.backing());
                }

                let object = std::sync::Arc::clone(object);
                let root: std::sync::Arc<$root> = object.clone();
                if let Some(narrowed) = $dispatch.adapt(&root).$facet() {
                    return narrowed;
                }
                ::tracing::trace!(
                    family = $dispatch.family,
                    facet = stringify!($facet),
                    "facet not exposed, wrapping as declared"
                );
                let wrapped: std::sync::Arc<$target> =
                    $crate::bridge::Wrapper::<$source, $crate::bridge::Plain>::wrap(object);
                wrapped
            }
        }
    };
    ($facade:ident: $source:ty => $target:ty, $dispatch:expr) => {
        impl $facade for $source {
            type Target = $target;

            fn adapt(object: &std::sync::Arc<Self>) -> std::sync::Arc<$target> {
                $dispatch.adapt(object)
            }
        }
    };
}
