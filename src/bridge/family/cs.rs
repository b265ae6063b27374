//! Coordinate system and axis families.

/// Instantiates the axis and coordinate-system families for one direction.
macro_rules! cs_family {
    ($src:ident => $dst:ident, $facade:ident) => {
        use std::sync::Arc;

        use $crate::bridge::{$facade, Dispatch, SubtypeTable, Wrapper, translate_code};
        use $crate::{$dst, $src};

        // ====================================================================
        // Axis
        // ====================================================================

        impl<S: ?Sized + $src::CoordinateSystemAxis> $dst::CoordinateSystemAxis for Wrapper<S> {
            fn abbreviation(&self) -> String {
                self.backing().abbreviation()
            }

            fn direction(&self) -> $dst::AxisDirection {
                translate_code(&self.backing().direction())
            }

            fn unit(&self) -> String {
                self.backing().unit()
            }

            fn minimum_value(&self) -> f64 {
                self.backing().minimum_value()
            }

            fn maximum_value(&self) -> f64 {
                self.backing().maximum_value()
            }

            fn range_meaning(&self) -> Option<$dst::RangeMeaning> {
                self.backing().range_meaning().as_ref().map(translate_code)
            }
        }

        pub static AXIS: Dispatch<dyn $src::CoordinateSystemAxis, dyn $dst::CoordinateSystemAxis> =
            Dispatch {
                family: "coordinate system axis",
                unwrap: unwrap_wrappers!(
                    dyn $dst::CoordinateSystemAxis: Wrapper<dyn $dst::CoordinateSystemAxis>
                ),
                table: SubtypeTable {
                    subtypes: &[],
                    generic: plain_wrapper!(
                        dyn $src::CoordinateSystemAxis => dyn $dst::CoordinateSystemAxis
                    ),
                },
            };

        facade!($facade: dyn $src::CoordinateSystemAxis => dyn $dst::CoordinateSystemAxis, AXIS);

        // ====================================================================
        // Coordinate system
        // ====================================================================

        impl<S: ?Sized + $src::CoordinateSystem> $dst::CoordinateSystem for Wrapper<S> {
            fn dimension(&self) -> usize {
                self.backing().dimension()
            }

            fn axis(&self, index: usize) -> Option<Arc<dyn $dst::CoordinateSystemAxis>> {
                self.backing().axis(index).map(|axis| $dst(&axis))
            }

            fn as_affine(self: Arc<Self>) -> Option<Arc<dyn $dst::AffineCs>> {
                forward_facet!(self.as_affine)
            }

            fn as_cartesian(self: Arc<Self>) -> Option<Arc<dyn $dst::CartesianCs>> {
                forward_facet!(self.as_cartesian)
            }

            fn as_ellipsoidal(self: Arc<Self>) -> Option<Arc<dyn $dst::EllipsoidalCs>> {
                forward_facet!(self.as_ellipsoidal)
            }

            fn as_spherical(self: Arc<Self>) -> Option<Arc<dyn $dst::SphericalCs>> {
                forward_facet!(self.as_spherical)
            }

            fn as_cylindrical(self: Arc<Self>) -> Option<Arc<dyn $dst::CylindricalCs>> {
                forward_facet!(self.as_cylindrical)
            }

            fn as_polar(self: Arc<Self>) -> Option<Arc<dyn $dst::PolarCs>> {
                forward_facet!(self.as_polar)
            }

            fn as_vertical(self: Arc<Self>) -> Option<Arc<dyn $dst::VerticalCs>> {
                forward_facet!(self.as_vertical)
            }

            fn as_linear(self: Arc<Self>) -> Option<Arc<dyn $dst::LinearCs>> {
                forward_facet!(self.as_linear)
            }

            fn as_time(self: Arc<Self>) -> Option<Arc<dyn $dst::TimeCs>> {
                forward_facet!(self.as_time)
            }

            fn as_user_defined(self: Arc<Self>) -> Option<Arc<dyn $dst::UserDefinedCs>> {
                forward_facet!(self.as_user_defined)
            }
        }

        impl<S: ?Sized + $src::AffineCs> $dst::AffineCs for Wrapper<S> {}
        impl<S: ?Sized + $src::CartesianCs> $dst::CartesianCs for Wrapper<S> {}
        impl<S: ?Sized + $src::EllipsoidalCs> $dst::EllipsoidalCs for Wrapper<S> {}
        impl<S: ?Sized + $src::SphericalCs> $dst::SphericalCs for Wrapper<S> {}
        impl<S: ?Sized + $src::CylindricalCs> $dst::CylindricalCs for Wrapper<S> {}
        impl<S: ?Sized + $src::PolarCs> $dst::PolarCs for Wrapper<S> {}
        impl<S: ?Sized + $src::VerticalCs> $dst::VerticalCs for Wrapper<S> {}
        impl<S: ?Sized + $src::LinearCs> $dst::LinearCs for Wrapper<S> {}
        impl<S: ?Sized + $src::TimeCs> $dst::TimeCs for Wrapper<S> {}
        impl<S: ?Sized + $src::UserDefinedCs> $dst::UserDefinedCs for Wrapper<S> {}

        pub static COORDINATE_SYSTEM: Dispatch<dyn $src::CoordinateSystem, dyn $dst::CoordinateSystem> =
            Dispatch {
                family: "coordinate system",
                unwrap: unwrap_wrappers!(
                    dyn $dst::CoordinateSystem:
                    Wrapper<dyn $dst::CoordinateSystem>,
                    Wrapper<dyn $dst::AffineCs>,
                    Wrapper<dyn $dst::CartesianCs>,
                    Wrapper<dyn $dst::EllipsoidalCs>,
                    Wrapper<dyn $dst::SphericalCs>,
                    Wrapper<dyn $dst::CylindricalCs>,
                    Wrapper<dyn $dst::PolarCs>,
                    Wrapper<dyn $dst::VerticalCs>,
                    Wrapper<dyn $dst::LinearCs>,
                    Wrapper<dyn $dst::TimeCs>,
                    Wrapper<dyn $dst::UserDefinedCs>,
                ),
                table: SubtypeTable {
                    // Cartesian after affine: every cartesian system is affine.
                    subtypes: &[
                        subtype!(dyn $src::CoordinateSystem => dyn $dst::CoordinateSystem, "affine",
                            |cs| Arc::clone(cs).as_affine().map(Wrapper::wrap)),
                        subtype!(dyn $src::CoordinateSystem => dyn $dst::CoordinateSystem, "cartesian",
                            |cs| Arc::clone(cs).as_cartesian().map(Wrapper::wrap)),
                        subtype!(dyn $src::CoordinateSystem => dyn $dst::CoordinateSystem, "ellipsoidal",
                            |cs| Arc::clone(cs).as_ellipsoidal().map(Wrapper::wrap)),
                        subtype!(dyn $src::CoordinateSystem => dyn $dst::CoordinateSystem, "spherical",
                            |cs| Arc::clone(cs).as_spherical().map(Wrapper::wrap)),
                        subtype!(dyn $src::CoordinateSystem => dyn $dst::CoordinateSystem, "cylindrical",
                            |cs| Arc::clone(cs).as_cylindrical().map(Wrapper::wrap)),
                        subtype!(dyn $src::CoordinateSystem => dyn $dst::CoordinateSystem, "polar",
                            |cs| Arc::clone(cs).as_polar().map(Wrapper::wrap)),
                        subtype!(dyn $src::CoordinateSystem => dyn $dst::CoordinateSystem, "vertical",
                            |cs| Arc::clone(cs).as_vertical().map(Wrapper::wrap)),
                        subtype!(dyn $src::CoordinateSystem => dyn $dst::CoordinateSystem, "linear",
                            |cs| Arc::clone(cs).as_linear().map(Wrapper::wrap)),
                        subtype!(dyn $src::CoordinateSystem => dyn $dst::CoordinateSystem, "time",
                            |cs| Arc::clone(cs).as_time().map(Wrapper::wrap)),
                        subtype!(dyn $src::CoordinateSystem => dyn $dst::CoordinateSystem, "user-defined",
                            |cs| Arc::clone(cs).as_user_defined().map(Wrapper::wrap)),
                    ],
                    generic: plain_wrapper!(dyn $src::CoordinateSystem => dyn $dst::CoordinateSystem),
                },
            };

        facade!($facade: dyn $src::CoordinateSystem => dyn $dst::CoordinateSystem, COORDINATE_SYSTEM);
        facade!($facade: dyn $src::AffineCs => dyn $dst::AffineCs,
            via dyn $src::CoordinateSystem, COORDINATE_SYSTEM, as_affine);
        facade!($facade: dyn $src::CartesianCs => dyn $dst::CartesianCs,
            via dyn $src::CoordinateSystem, COORDINATE_SYSTEM, as_cartesian);
        facade!($facade: dyn $src::EllipsoidalCs => dyn $dst::EllipsoidalCs,
            via dyn $src::CoordinateSystem, COORDINATE_SYSTEM, as_ellipsoidal);
        facade!($facade: dyn $src::SphericalCs => dyn $dst::SphericalCs,
            via dyn $src::CoordinateSystem, COORDINATE_SYSTEM, as_spherical);
        facade!($facade: dyn $src::CylindricalCs => dyn $dst::CylindricalCs,
            via dyn $src::CoordinateSystem, COORDINATE_SYSTEM, as_cylindrical);
        facade!($facade: dyn $src::PolarCs => dyn $dst::PolarCs,
            via dyn $src::CoordinateSystem, COORDINATE_SYSTEM, as_polar);
        facade!($facade: dyn $src::VerticalCs => dyn $dst::VerticalCs,
            via dyn $src::CoordinateSystem, COORDINATE_SYSTEM, as_vertical);
        facade!($facade: dyn $src::LinearCs => dyn $dst::LinearCs,
            via dyn $src::CoordinateSystem, COORDINATE_SYSTEM, as_linear);
        facade!($facade: dyn $src::TimeCs => dyn $dst::TimeCs,
            via dyn $src::CoordinateSystem, COORDINATE_SYSTEM, as_time);
        facade!($facade: dyn $src::UserDefinedCs => dyn $dst::UserDefinedCs,
            via dyn $src::CoordinateSystem, COORDINATE_SYSTEM, as_user_defined);
    };
}
