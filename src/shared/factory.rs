//! Authority factories and the CRS object factory, declared once for both hierarchies.

/// Declares the authority factories and the crs object factory in the invoking module.
///
/// Sibling items (`IdentifiedObject` and the other families) are named
/// through `super`, so the same declarations bind to each hierarchy's own
/// traits.
macro_rules! factory_interfaces {
    () => {
        use std::sync::Arc;

        use indexmap::{IndexMap, IndexSet};

        use super::{
            CartesianCs, Citation, CompoundCrs, CoordinateOperation, CoordinateReferenceSystem,
            CoordinateSystem, CoordinateSystemAxis, Datum, Ellipsoid, EllipsoidalCs, FactoryError,
            GeodeticDatum, GeographicCrs, IdentifiedObject, PrimeMeridian, ProjectedCrs,
            ReferenceIdentifier,
        };
        use crate::base::Object;

        /// Kind of object whose authority codes are listed.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ObjectKind {
            Any,
            CoordinateReferenceSystem,
            CoordinateSystem,
            CoordinateSystemAxis,
            Datum,
            Ellipsoid,
            PrimeMeridian,
            CoordinateOperation,
        }

        /// Value of an entry in a factory property map.
        #[derive(Debug, Clone)]
        pub enum PropertyValue {
            Text(String),
            Identifier(Arc<dyn ReferenceIdentifier>),
            Citation(Arc<dyn Citation>),
        }

        /// Properties given to object factories, keyed by property name (e.g. `"name"`).
        pub type Properties = IndexMap<String, PropertyValue>;

        /// Creates objects from codes allocated by an authority.
        ///
        /// A single factory may serve several object kinds; each `as_*` method
        /// reports one of those capabilities.
        pub trait AuthorityFactory: Object {
            fn vendor(&self) -> Arc<dyn Citation>;
            fn authority(&self) -> Arc<dyn Citation>;
            fn authority_codes(&self, kind: ObjectKind) -> Result<IndexSet<String>, FactoryError>;
            fn description_text(&self, code: &str) -> Result<String, FactoryError>;
            fn create_object(&self, code: &str) -> Result<Arc<dyn IdentifiedObject>, FactoryError>;

            fn as_datum_factory(self: Arc<Self>) -> Option<Arc<dyn DatumAuthorityFactory>> {
                None
            }

            fn as_cs_factory(self: Arc<Self>) -> Option<Arc<dyn CsAuthorityFactory>> {
                None
            }

            fn as_operation_factory(
                self: Arc<Self>,
            ) -> Option<Arc<dyn CoordinateOperationAuthorityFactory>> {
                None
            }

            fn as_crs_factory(self: Arc<Self>) -> Option<Arc<dyn CrsAuthorityFactory>> {
                None
            }
        }

        pub trait CrsAuthorityFactory: AuthorityFactory {
            fn create_coordinate_reference_system(
                &self,
                code: &str,
            ) -> Result<Arc<dyn CoordinateReferenceSystem>, FactoryError>;
            fn create_geographic_crs(&self, code: &str) -> Result<Arc<dyn GeographicCrs>, FactoryError>;
            fn create_projected_crs(&self, code: &str) -> Result<Arc<dyn ProjectedCrs>, FactoryError>;
        }

        pub trait DatumAuthorityFactory: AuthorityFactory {
            fn create_datum(&self, code: &str) -> Result<Arc<dyn Datum>, FactoryError>;
            fn create_geodetic_datum(&self, code: &str) -> Result<Arc<dyn GeodeticDatum>, FactoryError>;
            fn create_ellipsoid(&self, code: &str) -> Result<Arc<dyn Ellipsoid>, FactoryError>;
            fn create_prime_meridian(&self, code: &str) -> Result<Arc<dyn PrimeMeridian>, FactoryError>;
        }

        pub trait CsAuthorityFactory: AuthorityFactory {
            fn create_coordinate_system(
                &self,
                code: &str,
            ) -> Result<Arc<dyn CoordinateSystem>, FactoryError>;
            fn create_ellipsoidal_cs(&self, code: &str) -> Result<Arc<dyn EllipsoidalCs>, FactoryError>;
            fn create_cartesian_cs(&self, code: &str) -> Result<Arc<dyn CartesianCs>, FactoryError>;
            fn create_coordinate_system_axis(
                &self,
                code: &str,
            ) -> Result<Arc<dyn CoordinateSystemAxis>, FactoryError>;
        }

        pub trait CoordinateOperationAuthorityFactory: AuthorityFactory {
            fn create_coordinate_operation(
                &self,
                code: &str,
            ) -> Result<Arc<dyn CoordinateOperation>, FactoryError>;

            /// Operations converting between the two CRS codes, most preferred first.
            fn create_from_coordinate_reference_system_codes(
                &self,
                source_code: &str,
                target_code: &str,
            ) -> Result<Vec<Arc<dyn CoordinateOperation>>, FactoryError>;
        }

        /// Creates CRS objects from their components.
        pub trait CrsFactory: Object {
            fn vendor(&self) -> Arc<dyn Citation>;

            fn create_geographic_crs(
                &self,
                properties: &Properties,
                datum: Arc<dyn GeodeticDatum>,
                cs: Arc<dyn EllipsoidalCs>,
            ) -> Result<Arc<dyn GeographicCrs>, FactoryError>;

            fn create_compound_crs(
                &self,
                properties: &Properties,
                components: Vec<Arc<dyn CoordinateReferenceSystem>>,
            ) -> Result<Arc<dyn CompoundCrs>, FactoryError>;
        }
    };
}
