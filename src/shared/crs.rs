//! Coordinate reference system interfaces, declared once for both hierarchies.

/// Declares the coordinate reference system interfaces in the invoking module.
///
/// Sibling items (`IdentifiedObject` and the other families) are named
/// through `super`, so the same declarations bind to each hierarchy's own
/// traits.
macro_rules! crs_interfaces {
    () => {
        use std::sync::Arc;

        use super::{
            CartesianCs, Conversion, CoordinateSystem, Datum, EllipsoidalCs, EngineeringDatum,
            GeodeticDatum, IdentifiedObject, ImageDatum, TemporalDatum, TimeCs, VerticalCs, VerticalDatum,
        };

        /// Coordinate system related to an object by a datum.
        ///
        /// A type may answer more than one `as_*` method: a derived geographic CRS
        /// answers `as_single`, `as_geodetic`, `as_geographic` and `as_derived`.
        pub trait CoordinateReferenceSystem: IdentifiedObject {
            fn scope(&self) -> Option<String>;

            fn as_single(self: Arc<Self>) -> Option<Arc<dyn SingleCrs>> {
                None
            }

            fn as_geodetic(self: Arc<Self>) -> Option<Arc<dyn GeodeticCrs>> {
                None
            }

            fn as_geographic(self: Arc<Self>) -> Option<Arc<dyn GeographicCrs>> {
                None
            }

            fn as_geocentric(self: Arc<Self>) -> Option<Arc<dyn GeocentricCrs>> {
                None
            }

            fn as_vertical(self: Arc<Self>) -> Option<Arc<dyn VerticalCrs>> {
                None
            }

            fn as_temporal(self: Arc<Self>) -> Option<Arc<dyn TemporalCrs>> {
                None
            }

            fn as_engineering(self: Arc<Self>) -> Option<Arc<dyn EngineeringCrs>> {
                None
            }

            fn as_image(self: Arc<Self>) -> Option<Arc<dyn ImageCrs>> {
                None
            }

            fn as_compound(self: Arc<Self>) -> Option<Arc<dyn CompoundCrs>> {
                None
            }

            fn as_derived(self: Arc<Self>) -> Option<Arc<dyn DerivedCrs>> {
                None
            }

            fn as_projected(self: Arc<Self>) -> Option<Arc<dyn ProjectedCrs>> {
                None
            }
        }

        /// CRS with one datum and one coordinate system.
        pub trait SingleCrs: CoordinateReferenceSystem {
            fn datum(&self) -> Arc<dyn Datum>;
            fn coordinate_system(&self) -> Arc<dyn CoordinateSystem>;
        }

        pub trait GeodeticCrs: SingleCrs {
            fn geodetic_datum(&self) -> Arc<dyn GeodeticDatum>;
        }

        pub trait GeographicCrs: GeodeticCrs {
            fn ellipsoidal_cs(&self) -> Arc<dyn EllipsoidalCs>;
        }

        pub trait GeocentricCrs: GeodeticCrs {}

        pub trait VerticalCrs: SingleCrs {
            fn vertical_datum(&self) -> Arc<dyn VerticalDatum>;
            fn vertical_cs(&self) -> Arc<dyn VerticalCs>;
        }

        pub trait TemporalCrs: SingleCrs {
            fn temporal_datum(&self) -> Arc<dyn TemporalDatum>;
            fn time_cs(&self) -> Arc<dyn TimeCs>;
        }

        pub trait EngineeringCrs: SingleCrs {
            fn engineering_datum(&self) -> Arc<dyn EngineeringDatum>;
        }

        pub trait ImageCrs: SingleCrs {
            fn image_datum(&self) -> Arc<dyn ImageDatum>;
        }

        /// Ordered combination of independent CRSs.
        pub trait CompoundCrs: CoordinateReferenceSystem {
            fn components(&self) -> Vec<Arc<dyn CoordinateReferenceSystem>>;
        }

        /// CRS defined by a conversion applied to another CRS.
        pub trait DerivedCrs: SingleCrs {
            fn base_crs(&self) -> Arc<dyn SingleCrs>;
            fn conversion_from_base(&self) -> Arc<dyn Conversion>;
        }

        /// 2D CRS derived from a geographic CRS by a map projection.
        pub trait ProjectedCrs: DerivedCrs {
            fn base_geographic_crs(&self) -> Arc<dyn GeographicCrs>;
            fn cartesian_cs(&self) -> Arc<dyn CartesianCs>;
        }
    };
}
