//! Authority factory and CRS factory families.
//!
//! Factory wrappers translate in both directions within one call: arguments
//! of the target hierarchy go back through the reverse facade, created
//! objects go forward, and factory errors are translated.

macro_rules! factory_family {
    ($src:ident => $dst:ident, $facade:ident) => {
        use std::sync::Arc;

        use indexmap::IndexSet;

        use $crate::bridge::convert;
        use $crate::bridge::errors::$dst as errors;
        use $crate::bridge::{$facade, Dispatch, SubtypeTable, Wrapper, lift_vec};
        use $crate::{$dst, $src};

        /// Adapts the outcome of a `create_*` call.
        fn created<T: ?Sized + $facade>(
            result: Result<Arc<T>, $src::FactoryError>,
        ) -> Result<Arc<T::Target>, $dst::FactoryError> {
            result.map(|object| $dst(&object)).map_err(errors::factory)
        }

        // ====================================================================
        // Authority factories
        // ====================================================================

        impl<S: ?Sized + $src::AuthorityFactory> $dst::AuthorityFactory for Wrapper<S> {
            fn vendor(&self) -> Arc<dyn $dst::Citation> {
                $dst(&self.backing().vendor())
            }

            fn authority(&self) -> Arc<dyn $dst::Citation> {
                $dst(&self.backing().authority())
            }

            fn authority_codes(
                &self,
                kind: $dst::ObjectKind,
            ) -> Result<IndexSet<String>, $dst::FactoryError> {
                self.backing()
                    .authority_codes(convert::$src::object_kind(kind))
                    .map_err(errors::factory)
            }

            fn description_text(&self, code: &str) -> Result<String, $dst::FactoryError> {
                self.backing().description_text(code).map_err(errors::factory)
            }

            fn create_object(
                &self,
                code: &str,
            ) -> Result<Arc<dyn $dst::IdentifiedObject>, $dst::FactoryError> {
                created(self.backing().create_object(code))
            }

            fn as_datum_factory(self: Arc<Self>) -> Option<Arc<dyn $dst::DatumAuthorityFactory>> {
                forward_facet!(self.as_datum_factory)
            }

            fn as_cs_factory(self: Arc<Self>) -> Option<Arc<dyn $dst::CsAuthorityFactory>> {
                forward_facet!(self.as_cs_factory)
            }

            fn as_operation_factory(
                self: Arc<Self>,
            ) -> Option<Arc<dyn $dst::CoordinateOperationAuthorityFactory>> {
                forward_facet!(self.as_operation_factory)
            }

            fn as_crs_factory(self: Arc<Self>) -> Option<Arc<dyn $dst::CrsAuthorityFactory>> {
                forward_facet!(self.as_crs_factory)
            }
        }

        impl<S: ?Sized + $src::CrsAuthorityFactory> $dst::CrsAuthorityFactory for Wrapper<S> {
            fn create_coordinate_reference_system(
                &self,
                code: &str,
            ) -> Result<Arc<dyn $dst::CoordinateReferenceSystem>, $dst::FactoryError> {
                created(self.backing().create_coordinate_reference_system(code))
            }

            fn create_geographic_crs(
                &self,
                code: &str,
            ) -> Result<Arc<dyn $dst::GeographicCrs>, $dst::FactoryError> {
                created(self.backing().create_geographic_crs(code))
            }

            fn create_projected_crs(
                &self,
                code: &str,
            ) -> Result<Arc<dyn $dst::ProjectedCrs>, $dst::FactoryError> {
                created(self.backing().create_projected_crs(code))
            }
        }

        impl<S: ?Sized + $src::DatumAuthorityFactory> $dst::DatumAuthorityFactory for Wrapper<S> {
            fn create_datum(&self, code: &str) -> Result<Arc<dyn $dst::Datum>, $dst::FactoryError> {
                created(self.backing().create_datum(code))
            }

            fn create_geodetic_datum(
                &self,
                code: &str,
            ) -> Result<Arc<dyn $dst::GeodeticDatum>, $dst::FactoryError> {
                created(self.backing().create_geodetic_datum(code))
            }

            fn create_ellipsoid(
                &self,
                code: &str,
            ) -> Result<Arc<dyn $dst::Ellipsoid>, $dst::FactoryError> {
                created(self.backing().create_ellipsoid(code))
            }

            fn create_prime_meridian(
                &self,
                code: &str,
            ) -> Result<Arc<dyn $dst::PrimeMeridian>, $dst::FactoryError> {
                created(self.backing().create_prime_meridian(code))
            }
        }

        impl<S: ?Sized + $src::CsAuthorityFactory> $dst::CsAuthorityFactory for Wrapper<S> {
            fn create_coordinate_system(
                &self,
                code: &str,
            ) -> Result<Arc<dyn $dst::CoordinateSystem>, $dst::FactoryError> {
                created(self.backing().create_coordinate_system(code))
            }

            fn create_ellipsoidal_cs(
                &self,
                code: &str,
            ) -> Result<Arc<dyn $dst::EllipsoidalCs>, $dst::FactoryError> {
                created(self.backing().create_ellipsoidal_cs(code))
            }

            fn create_cartesian_cs(
                &self,
                code: &str,
            ) -> Result<Arc<dyn $dst::CartesianCs>, $dst::FactoryError> {
                created(self.backing().create_cartesian_cs(code))
            }

            fn create_coordinate_system_axis(
                &self,
                code: &str,
            ) -> Result<Arc<dyn $dst::CoordinateSystemAxis>, $dst::FactoryError> {
                created(self.backing().create_coordinate_system_axis(code))
            }
        }

        impl<S: ?Sized + $src::CoordinateOperationAuthorityFactory>
            $dst::CoordinateOperationAuthorityFactory for Wrapper<S>
        {
            fn create_coordinate_operation(
                &self,
                code: &str,
            ) -> Result<Arc<dyn $dst::CoordinateOperation>, $dst::FactoryError> {
                created(self.backing().create_coordinate_operation(code))
            }

            fn create_from_coordinate_reference_system_codes(
                &self,
                source_code: &str,
                target_code: &str,
            ) -> Result<Vec<Arc<dyn $dst::CoordinateOperation>>, $dst::FactoryError> {
                let operations = self
                    .backing()
                    .create_from_coordinate_reference_system_codes(source_code, target_code)
                    .map_err(errors::factory)?;
                Ok(lift_vec(&operations, $dst))
            }
        }

        pub static AUTHORITY_FACTORY: Dispatch<dyn $src::AuthorityFactory, dyn $dst::AuthorityFactory> =
            Dispatch {
                family: "authority factory",
                unwrap: unwrap_wrappers!(
                    dyn $dst::AuthorityFactory:
                    Wrapper<dyn $dst::AuthorityFactory>,
                    Wrapper<dyn $dst::DatumAuthorityFactory>,
                    Wrapper<dyn $dst::CsAuthorityFactory>,
                    Wrapper<dyn $dst::CoordinateOperationAuthorityFactory>,
                    Wrapper<dyn $dst::CrsAuthorityFactory>,
                ),
                table: SubtypeTable {
                    subtypes: &[
                        subtype!(dyn $src::AuthorityFactory => dyn $dst::AuthorityFactory, "datum",
                            |factory| Arc::clone(factory).as_datum_factory().map(Wrapper::wrap)),
                        subtype!(dyn $src::AuthorityFactory => dyn $dst::AuthorityFactory, "coordinate system",
                            |factory| Arc::clone(factory).as_cs_factory().map(Wrapper::wrap)),
                        subtype!(dyn $src::AuthorityFactory => dyn $dst::AuthorityFactory, "coordinate operation",
                            |factory| Arc::clone(factory).as_operation_factory().map(Wrapper::wrap)),
                        subtype!(dyn $src::AuthorityFactory => dyn $dst::AuthorityFactory, "coordinate reference system",
                            |factory| Arc::clone(factory).as_crs_factory().map(Wrapper::wrap)),
                    ],
                    generic: plain_wrapper!(dyn $src::AuthorityFactory => dyn $dst::AuthorityFactory),
                },
            };

        facade!($facade: dyn $src::AuthorityFactory => dyn $dst::AuthorityFactory, AUTHORITY_FACTORY);
        facade!($facade: dyn $src::DatumAuthorityFactory => dyn $dst::DatumAuthorityFactory,
            via dyn $src::AuthorityFactory, AUTHORITY_FACTORY, as_datum_factory);
        facade!($facade: dyn $src::CsAuthorityFactory => dyn $dst::CsAuthorityFactory,
            via dyn $src::AuthorityFactory, AUTHORITY_FACTORY, as_cs_factory);
        facade!($facade: dyn $src::CoordinateOperationAuthorityFactory
            => dyn $dst::CoordinateOperationAuthorityFactory,
            via dyn $src::AuthorityFactory, AUTHORITY_FACTORY, as_operation_factory);
        facade!($facade: dyn $src::CrsAuthorityFactory => dyn $dst::CrsAuthorityFactory,
            via dyn $src::AuthorityFactory, AUTHORITY_FACTORY, as_crs_factory);

        // ====================================================================
        // Object factory
        // ====================================================================

        impl<S: ?Sized + $src::CrsFactory> $dst::CrsFactory for Wrapper<S> {
            fn vendor(&self) -> Arc<dyn $dst::Citation> {
                $dst(&self.backing().vendor())
            }

            fn create_geographic_crs(
                &self,
                properties: &$dst::Properties,
                datum: Arc<dyn $dst::GeodeticDatum>,
                cs: Arc<dyn $dst::EllipsoidalCs>,
            ) -> Result<Arc<dyn $dst::GeographicCrs>, $dst::FactoryError> {
                created(self.backing().create_geographic_crs(
                    &convert::$src::properties(properties),
                    $src(&datum),
                    $src(&cs),
                ))
            }

            fn create_compound_crs(
                &self,
                properties: &$dst::Properties,
                components: Vec<Arc<dyn $dst::CoordinateReferenceSystem>>,
            ) -> Result<Arc<dyn $dst::CompoundCrs>, $dst::FactoryError> {
                created(self.backing().create_compound_crs(
                    &convert::$src::properties(properties),
                    lift_vec(&components, $src),
                ))
            }
        }

        pub static CRS_FACTORY: Dispatch<dyn $src::CrsFactory, dyn $dst::CrsFactory> = Dispatch {
            family: "CRS factory",
            unwrap: unwrap_wrappers!(dyn $dst::CrsFactory: Wrapper<dyn $dst::CrsFactory>),
            table: SubtypeTable {
                subtypes: &[],
                generic: plain_wrapper!(dyn $src::CrsFactory => dyn $dst::CrsFactory),
            },
        };

        facade!($facade: dyn $src::CrsFactory => dyn $dst::CrsFactory, CRS_FACTORY);
    };
}
