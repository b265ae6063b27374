//! Datum, ellipsoid and prime meridian interfaces, declared once for both hierarchies.

/// Declares the datum, ellipsoid and prime meridian interfaces in the invoking module.
///
/// Sibling items (`IdentifiedObject` and the other families) are named
/// through `super`, so the same declarations bind to each hierarchy's own
/// traits.
macro_rules! datum_interfaces {
    () => {
        use std::sync::Arc;

        use super::IdentifiedObject;

        crate::code_list! {
            /// Type of a vertical datum.
            pub enum VerticalDatumType {
                Geoidal = "geoidal",
                Depth = "depth",
                Barometric = "barometric",
                OrthometricHeight = "orthometric",
                EllipsoidalHeight = "ellipsoidal",
            }
        }

        crate::code_list! {
            /// How an image grid is associated with the image data.
            pub enum PixelInCell {
                CellCenter = "cellCenter",
                CellCorner = "cellCorner",
            }
        }

        /// Geometric figure approximating the shape of the Earth.
        pub trait Ellipsoid: IdentifiedObject {
            fn axis_unit(&self) -> String;
            fn semi_major_axis(&self) -> f64;
            fn semi_minor_axis(&self) -> f64;
            fn inverse_flattening(&self) -> f64;
            fn is_ivf_definitive(&self) -> bool;
            fn is_sphere(&self) -> bool;
        }

        /// Origin from which longitude values are determined.
        pub trait PrimeMeridian: IdentifiedObject {
            fn greenwich_longitude(&self) -> f64;
            fn angular_unit(&self) -> String;
        }

        /// Relationship of a coordinate system to the Earth or another object.
        pub trait Datum: IdentifiedObject {
            fn anchor_point(&self) -> Option<String>;
            fn realization_epoch(&self) -> Option<String>;
            fn scope(&self) -> Option<String>;

            fn as_geodetic(self: Arc<Self>) -> Option<Arc<dyn GeodeticDatum>> {
                None
            }

            fn as_vertical(self: Arc<Self>) -> Option<Arc<dyn VerticalDatum>> {
                None
            }

            fn as_temporal(self: Arc<Self>) -> Option<Arc<dyn TemporalDatum>> {
                None
            }

            fn as_engineering(self: Arc<Self>) -> Option<Arc<dyn EngineeringDatum>> {
                None
            }

            fn as_image(self: Arc<Self>) -> Option<Arc<dyn ImageDatum>> {
                None
            }
        }

        pub trait GeodeticDatum: Datum {
            fn ellipsoid(&self) -> Arc<dyn Ellipsoid>;
            fn prime_meridian(&self) -> Arc<dyn PrimeMeridian>;
        }

        pub trait VerticalDatum: Datum {
            fn vertical_datum_type(&self) -> VerticalDatumType;
        }

        pub trait TemporalDatum: Datum {
            /// ISO 8601 text of the time origin.
            fn origin(&self) -> String;
        }

        pub trait EngineeringDatum: Datum {}

        pub trait ImageDatum: Datum {
            fn pixel_in_cell(&self) -> PixelInCell;
        }
    };
}
