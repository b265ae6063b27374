//! Datum, ellipsoid and prime meridian families.

macro_rules! datum_family {
    ($src:ident => $dst:ident, $facade:ident) => {
        use std::sync::Arc;

        use $crate::bridge::{$facade, Dispatch, SubtypeTable, Wrapper, translate_code};
        use $crate::{$dst, $src};

        // ====================================================================
        // Ellipsoid and prime meridian
        // ====================================================================

        impl<S: ?Sized + $src::Ellipsoid> $dst::Ellipsoid for Wrapper<S> {
            fn axis_unit(&self) -> String {
                self.backing().axis_unit()
            }

            fn semi_major_axis(&self) -> f64 {
                self.backing().semi_major_axis()
            }

            fn semi_minor_axis(&self) -> f64 {
                self.backing().semi_minor_axis()
            }

            fn inverse_flattening(&self) -> f64 {
                self.backing().inverse_flattening()
            }

            fn is_ivf_definitive(&self) -> bool {
                self.backing().is_ivf_definitive()
            }

            fn is_sphere(&self) -> bool {
                self.backing().is_sphere()
            }
        }

        pub static ELLIPSOID: Dispatch<dyn $src::Ellipsoid, dyn $dst::Ellipsoid> = Dispatch {
            family: "ellipsoid",
            unwrap: unwrap_wrappers!(dyn $dst::Ellipsoid: Wrapper<dyn $dst::Ellipsoid>),
            table: SubtypeTable {
                subtypes: &[],
                generic: plain_wrapper!(dyn $src::Ellipsoid => dyn $dst::Ellipsoid),
            },
        };

        facade!($facade: dyn $src::Ellipsoid => dyn $dst::Ellipsoid, ELLIPSOID);

        impl<S: ?Sized + $src::PrimeMeridian> $dst::PrimeMeridian for Wrapper<S> {
            fn greenwich_longitude(&self) -> f64 {
                self.backing().greenwich_longitude()
            }

            fn angular_unit(&self) -> String {
                self.backing().angular_unit()
            }
        }

        pub static PRIME_MERIDIAN: Dispatch<dyn $src::PrimeMeridian, dyn $dst::PrimeMeridian> =
            Dispatch {
                family: "prime meridian",
                unwrap: unwrap_wrappers!(dyn $dst::PrimeMeridian: Wrapper<dyn $dst::PrimeMeridian>),
                table: SubtypeTable {
                    subtypes: &[],
                    generic: plain_wrapper!(dyn $src::PrimeMeridian => dyn $dst::PrimeMeridian),
                },
            };

        facade!($facade: dyn $src::PrimeMeridian => dyn $dst::PrimeMeridian, PRIME_MERIDIAN);

        // ====================================================================
        // Datum
        // ====================================================================

        impl<S: ?Sized + $src::Datum> $dst::Datum for Wrapper<S> {
            fn anchor_point(&self) -> Option<String> {
                self.backing().anchor_point()
            }

            fn realization_epoch(&self) -> Option<String> {
                self.backing().realization_epoch()
            }

            fn scope(&self) -> Option<String> {
                self.backing().scope()
            }

            fn as_geodetic(self: Arc<Self>) -> Option<Arc<dyn $dst::GeodeticDatum>> {
                forward_facet!(self.as_geodetic)
            }

            fn as_vertical(self: Arc<Self>) -> Option<Arc<dyn $dst::VerticalDatum>> {
                forward_facet!(self.as_vertical)
            }

            fn as_temporal(self: Arc<Self>) -> Option<Arc<dyn $dst::TemporalDatum>> {
                forward_facet!(self.as_temporal)
            }

            fn as_engineering(self: Arc<Self>) -> Option<Arc<dyn $dst::EngineeringDatum>> {
                forward_facet!(self.as_engineering)
            }

            fn as_image(self: Arc<Self>) -> Option<Arc<dyn $dst::ImageDatum>> {
                forward_facet!(self.as_image)
            }
        }

        impl<S: ?Sized + $src::GeodeticDatum> $dst::GeodeticDatum for Wrapper<S> {
            fn ellipsoid(&self) -> Arc<dyn $dst::Ellipsoid> {
                $dst(&self.backing().ellipsoid())
            }

            fn prime_meridian(&self) -> Arc<dyn $dst::PrimeMeridian> {
                $dst(&self.backing().prime_meridian())
            }
        }

        impl<S: ?Sized + $src::VerticalDatum> $dst::VerticalDatum for Wrapper<S> {
            fn vertical_datum_type(&self) -> $dst::VerticalDatumType {
                translate_code(&self.backing().vertical_datum_type())
            }
        }

        impl<S: ?Sized + $src::TemporalDatum> $dst::TemporalDatum for Wrapper<S> {
            fn origin(&self) -> String {
                self.backing().origin()
            }
        }

        impl<S: ?Sized + $src::EngineeringDatum> $dst::EngineeringDatum for Wrapper<S> {}

        impl<S: ?Sized + $src::ImageDatum> $dst::ImageDatum for Wrapper<S> {
            fn pixel_in_cell(&self) -> $dst::PixelInCell {
                translate_code(&self.backing().pixel_in_cell())
            }
        }

        pub static DATUM: Dispatch<dyn $src::Datum, dyn $dst::Datum> = Dispatch {
            family: "datum",
            unwrap: unwrap_wrappers!(
                dyn $dst::Datum:
                Wrapper<dyn $dst::Datum>,
                Wrapper<dyn $dst::GeodeticDatum>,
                Wrapper<dyn $dst::VerticalDatum>,
                Wrapper<dyn $dst::TemporalDatum>,
                Wrapper<dyn $dst::EngineeringDatum>,
                Wrapper<dyn $dst::ImageDatum>,
            ),
            table: SubtypeTable {
                subtypes: &[
                    subtype!(dyn $src::Datum => dyn $dst::Datum, "geodetic",
                        |datum| Arc::clone(datum).as_geodetic().map(Wrapper::wrap)),
                    subtype!(dyn $src::Datum => dyn $dst::Datum, "vertical",
                        |datum| Arc::clone(datum).as_vertical().map(Wrapper::wrap)),
                    subtype!(dyn $src::Datum => dyn $dst::Datum, "temporal",
                        |datum| Arc::clone(datum).as_temporal().map(Wrapper::wrap)),
                    subtype!(dyn $src::Datum => dyn $dst::Datum, "engineering",
                        |datum| Arc::clone(datum).as_engineering().map(Wrapper::wrap)),
                    subtype!(dyn $src::Datum => dyn $dst::Datum, "image",
                        |datum| Arc::clone(datum).as_image().map(Wrapper::wrap)),
                ],
                generic: plain_wrapper!(dyn $src::Datum => dyn $dst::Datum),
            },
        };

        facade!($facade: dyn $src::Datum => dyn $dst::Datum, DATUM);
        facade!($facade: dyn $src::GeodeticDatum => dyn $dst::GeodeticDatum,
            via dyn $src::Datum, DATUM, as_geodetic);
        facade!($facade: dyn $src::VerticalDatum => dyn $dst::VerticalDatum,
            via dyn $src::Datum, DATUM, as_vertical);
        facade!($facade: dyn $src::TemporalDatum => dyn $dst::TemporalDatum,
            via dyn $src::Datum, DATUM, as_temporal);
        facade!($facade: dyn $src::EngineeringDatum => dyn $dst::EngineeringDatum,
            via dyn $src::Datum, DATUM, as_engineering);
        facade!($facade: dyn $src::ImageDatum => dyn $dst::ImageDatum,
            via dyn $src::Datum, DATUM, as_image);
    };
}
