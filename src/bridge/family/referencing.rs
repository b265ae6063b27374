//! The identified-object family, which resolves by delegating to the family
//! of the object's concrete kind.

/// Instantiates the identified-object family for one direction.
///
/// `alias` is the target alias element type and `$alias_fn` translates one
/// source alias into it.
macro_rules! referencing_family {
    ($src:ident => $dst:ident, $facade:ident, alias: $alias:ty, $alias_fn:path) => {
        use std::any::{Any, TypeId};
        use std::sync::Arc;

        use $crate::bridge::{$facade, Dispatch, SubtypeTable, Wrapper, lift_vec};
        use $crate::{$dst, $src};

        impl<S, K> $dst::IdentifiedObject for Wrapper<S, K>
        where
            S: ?Sized + $src::IdentifiedObject,
            K: 'static,
        {
            fn name(&self) -> Arc<dyn $dst::ReferenceIdentifier> {
                $dst(&self.backing().name())
            }

            fn alias(&self) -> Vec<$alias> {
                if TypeId::of::<S>() == TypeId::of::<dyn $src::IdentifiedObject>() {
                    // TODO: translate aliases of unclassified objects once they can be
                    // told apart from objects whose family was lost in a round trip
                    return Vec::new();
                }
                self.backing().alias().iter().map(|alias| $alias_fn(alias)).collect()
            }

            fn identifiers(&self) -> Vec<Arc<dyn $dst::ReferenceIdentifier>> {
                lift_vec(&self.backing().identifiers(), $dst)
            }

            fn remarks(&self) -> Option<String> {
                self.backing().remarks()
            }

            fn to_wkt(&self) -> Result<String, $dst::UnformattableObjectError> {
                self.backing()
                    .to_wkt()
                    .map_err($crate::bridge::errors::$dst::unformattable)
            }

            fn as_coordinate_reference_system(
                self: Arc<Self>,
            ) -> Option<Arc<dyn $dst::CoordinateReferenceSystem>> {
                Some($dst(&Arc::clone(self.backing()).as_coordinate_reference_system()?))
            }

            fn as_coordinate_system(self: Arc<Self>) -> Option<Arc<dyn $dst::CoordinateSystem>> {
                Some($dst(&Arc::clone(self.backing()).as_coordinate_system()?))
            }

            fn as_coordinate_system_axis(
                self: Arc<Self>,
            ) -> Option<Arc<dyn $dst::CoordinateSystemAxis>> {
                Some($dst(&Arc::clone(self.backing()).as_coordinate_system_axis()?))
            }

            fn as_datum(self: Arc<Self>) -> Option<Arc<dyn $dst::Datum>> {
                Some($dst(&Arc::clone(self.backing()).as_datum()?))
            }

            fn as_ellipsoid(self: Arc<Self>) -> Option<Arc<dyn $dst::Ellipsoid>> {
                Some($dst(&Arc::clone(self.backing()).as_ellipsoid()?))
            }

            fn as_prime_meridian(self: Arc<Self>) -> Option<Arc<dyn $dst::PrimeMeridian>> {
                Some($dst(&Arc::clone(self.backing()).as_prime_meridian()?))
            }

            fn as_coordinate_operation(
                self: Arc<Self>,
            ) -> Option<Arc<dyn $dst::CoordinateOperation>> {
                Some($dst(&Arc::clone(self.backing()).as_coordinate_operation()?))
            }

            fn as_operation_method(self: Arc<Self>) -> Option<Arc<dyn $dst::OperationMethod>> {
                Some($dst(&Arc::clone(self.backing()).as_operation_method()?))
            }

            fn as_parameter_descriptor(
                self: Arc<Self>,
            ) -> Option<Arc<dyn $dst::GeneralParameterDescriptor>> {
                Some($dst(&Arc::clone(self.backing()).as_parameter_descriptor()?))
            }
        }

        /// Reverse wrappers of every identified family, checked before any
        /// family facet is queried.
        fn unwrap(any: &dyn Any) -> Option<Arc<dyn $dst::IdentifiedObject>> {
            if let Some(wrapper) = any.downcast_ref::<Wrapper<dyn $dst::IdentifiedObject>>() {
                return Some(Arc::clone(wrapper.backing()));
            }
            (super::cs::AXIS.unwrap)(any)
                .map(|o| o as Arc<dyn $dst::IdentifiedObject>)
                .or_else(|| {
                    (super::cs::COORDINATE_SYSTEM.unwrap)(any).map(|o| o as Arc<dyn $dst::IdentifiedObject>)
                })
                .or_else(|| {
                    (super::datum::ELLIPSOID.unwrap)(any).map(|o| o as Arc<dyn $dst::IdentifiedObject>)
                })
                .or_else(|| {
                    (super::datum::PRIME_MERIDIAN.unwrap)(any).map(|o| o as Arc<dyn $dst::IdentifiedObject>)
                })
                .or_else(|| {
                    (super::datum::DATUM.unwrap)(any).map(|o| o as Arc<dyn $dst::IdentifiedObject>)
                })
                .or_else(|| {
                    (super::crs::CRS.unwrap)(any).map(|o| o as Arc<dyn $dst::IdentifiedObject>)
                })
                .or_else(|| {
                    (super::operation::OPERATION_METHOD.unwrap)(any).map(|o| o as Arc<dyn $dst::IdentifiedObject>)
                })
                .or_else(|| {
                    (super::operation::COORDINATE_OPERATION.unwrap)(any).map(|o| o as Arc<dyn $dst::IdentifiedObject>)
                })
                .or_else(|| {
                    (super::parameter::PARAMETER_DESCRIPTOR.unwrap)(any).map(|o| o as Arc<dyn $dst::IdentifiedObject>)
                })
        }

        pub static IDENTIFIED_OBJECT: Dispatch<
            dyn $src::IdentifiedObject,
            dyn $dst::IdentifiedObject,
        > = Dispatch {
            family: "identified object",
            unwrap,
            table: SubtypeTable {
                subtypes: &[
                    subtype!(
                        dyn $src::IdentifiedObject => dyn $dst::IdentifiedObject,
                        "coordinate system axis",
                        |object| Arc::clone(object).as_coordinate_system_axis().map(|o| $dst(&o))
                    ),
                    subtype!(
                        dyn $src::IdentifiedObject => dyn $dst::IdentifiedObject,
                        "ellipsoid",
                        |object| Arc::clone(object).as_ellipsoid().map(|o| $dst(&o))
                    ),
                    subtype!(
                        dyn $src::IdentifiedObject => dyn $dst::IdentifiedObject,
                        "prime meridian",
                        |object| Arc::clone(object).as_prime_meridian().map(|o| $dst(&o))
                    ),
                    subtype!(
                        dyn $src::IdentifiedObject => dyn $dst::IdentifiedObject,
                        "coordinate system",
                        |object| Arc::clone(object).as_coordinate_system().map(|o| $dst(&o))
                    ),
                    subtype!(
                        dyn $src::IdentifiedObject => dyn $dst::IdentifiedObject,
                        "datum",
                        |object| Arc::clone(object).as_datum().map(|o| $dst(&o))
                    ),
                    subtype!(
                        dyn $src::IdentifiedObject => dyn $dst::IdentifiedObject,
                        "coordinate reference system",
                        |object| {
                            Arc::clone(object)
                                .as_coordinate_reference_system()
                                .map(|o| $dst(&o))
                        }
                    ),
                    subtype!(
                        dyn $src::IdentifiedObject => dyn $dst::IdentifiedObject,
                        "operation method",
                        |object| Arc::clone(object).as_operation_method().map(|o| $dst(&o))
                    ),
                    subtype!(
                        dyn $src::IdentifiedObject => dyn $dst::IdentifiedObject,
                        "coordinate operation",
                        |object| Arc::clone(object).as_coordinate_operation().map(|o| $dst(&o))
                    ),
                    subtype!(
                        dyn $src::IdentifiedObject => dyn $dst::IdentifiedObject,
                        "parameter descriptor",
                        |object| Arc::clone(object).as_parameter_descriptor().map(|o| $dst(&o))
                    ),
                ],
                generic: plain_wrapper!(dyn $src::IdentifiedObject => dyn $dst::IdentifiedObject),
            },
        };

        facade!($facade: dyn $src::IdentifiedObject => dyn $dst::IdentifiedObject, IDENTIFIED_OBJECT);
    };
}
