//! Coordinate reference system family.
//!
//! A derived CRS varies on two axes at once: it is derived from a base CRS,
//! and it is itself geodetic, geographic, vertical, temporal or engineering.
//! When the derived subtype wins, a nested [`SubtypeTable`](crate::bridge::SubtypeTable)
//! picks a wrapper specialized on the second axis. The specialized wrapper
//! keeps the derived CRS as its only backing reference and queries the kind
//! facet on each call.

macro_rules! crs_family {
    ($src:ident => $dst:ident, $facade:ident) => {
        use std::sync::Arc;

        use $crate::bridge::{
            $facade, DerivedEngineering, DerivedGeodetic, DerivedGeographic, DerivedTemporal,
            DerivedVertical, Dispatch, SubtypeTable, Wrapper, lift_vec, narrow,
        };
        use $crate::{$dst, $src};

        const DERIVED: &str = "derived coordinate reference system";

        // ====================================================================
        // Root, single and derived CRS (all wrapper kinds)
        // ====================================================================

        impl<S, K> $dst::CoordinateReferenceSystem for Wrapper<S, K>
        where
            S: ?Sized + $src::CoordinateReferenceSystem,
            K: 'static,
        {
            fn scope(&self) -> Option<String> {
                self.backing().scope()
            }

            fn as_single(self: Arc<Self>) -> Option<Arc<dyn $dst::SingleCrs>> {
                forward_facet!(self.as_single)
            }

            fn as_geodetic(self: Arc<Self>) -> Option<Arc<dyn $dst::GeodeticCrs>> {
                forward_facet!(self.as_geodetic)
            }

            fn as_geographic(self: Arc<Self>) -> Option<Arc<dyn $dst::GeographicCrs>> {
                forward_facet!(self.as_geographic)
            }

            fn as_geocentric(self: Arc<Self>) -> Option<Arc<dyn $dst::GeocentricCrs>> {
                forward_facet!(self.as_geocentric)
            }

            fn as_vertical(self: Arc<Self>) -> Option<Arc<dyn $dst::VerticalCrs>> {
                forward_facet!(self.as_vertical)
            }

            fn as_temporal(self: Arc<Self>) -> Option<Arc<dyn $dst::TemporalCrs>> {
                forward_facet!(self.as_temporal)
            }

            fn as_engineering(self: Arc<Self>) -> Option<Arc<dyn $dst::EngineeringCrs>> {
                forward_facet!(self.as_engineering)
            }

            fn as_image(self: Arc<Self>) -> Option<Arc<dyn $dst::ImageCrs>> {
                forward_facet!(self.as_image)
            }

            fn as_compound(self: Arc<Self>) -> Option<Arc<dyn $dst::CompoundCrs>> {
                forward_facet!(self.as_compound)
            }

            fn as_derived(self: Arc<Self>) -> Option<Arc<dyn $dst::DerivedCrs>> {
                let derived = Arc::clone(self.backing()).as_derived()?;
                Some(DERIVED_CRS.select(&derived).1)
            }

            fn as_projected(self: Arc<Self>) -> Option<Arc<dyn $dst::ProjectedCrs>> {
                forward_facet!(self.as_projected)
            }
        }

        impl<S, K> $dst::SingleCrs for Wrapper<S, K>
        where
            S: ?Sized + $src::SingleCrs,
            K: 'static,
        {
            fn datum(&self) -> Arc<dyn $dst::Datum> {
                $dst(&self.backing().datum())
            }

            fn coordinate_system(&self) -> Arc<dyn $dst::CoordinateSystem> {
                $dst(&self.backing().coordinate_system())
            }
        }

        impl<S, K> $dst::DerivedCrs for Wrapper<S, K>
        where
            S: ?Sized + $src::DerivedCrs,
            K: 'static,
        {
            fn base_crs(&self) -> Arc<dyn $dst::SingleCrs> {
                $dst(&self.backing().base_crs())
            }

            fn conversion_from_base(&self) -> Arc<dyn $dst::Conversion> {
                $dst(&self.backing().conversion_from_base())
            }
        }

        // ====================================================================
        // Plain subtype wrappers
        // ====================================================================

        impl<S: ?Sized + $src::GeodeticCrs> $dst::GeodeticCrs for Wrapper<S> {
            fn geodetic_datum(&self) -> Arc<dyn $dst::GeodeticDatum> {
                $dst(&self.backing().geodetic_datum())
            }
        }

        impl<S: ?Sized + $src::GeographicCrs> $dst::GeographicCrs for Wrapper<S> {
            fn ellipsoidal_cs(&self) -> Arc<dyn $dst::EllipsoidalCs> {
                $dst(&self.backing().ellipsoidal_cs())
            }
        }

        impl<S: ?Sized + $src::GeocentricCrs> $dst::GeocentricCrs for Wrapper<S> {}

        impl<S: ?Sized + $src::VerticalCrs> $dst::VerticalCrs for Wrapper<S> {
            fn vertical_datum(&self) -> Arc<dyn $dst::VerticalDatum> {
                $dst(&self.backing().vertical_datum())
            }

            fn vertical_cs(&self) -> Arc<dyn $dst::VerticalCs> {
                $dst(&self.backing().vertical_cs())
            }
        }

        impl<S: ?Sized + $src::TemporalCrs> $dst::TemporalCrs for Wrapper<S> {
            fn temporal_datum(&self) -> Arc<dyn $dst::TemporalDatum> {
                $dst(&self.backing().temporal_datum())
            }

            fn time_cs(&self) -> Arc<dyn $dst::TimeCs> {
                $dst(&self.backing().time_cs())
            }
        }

        impl<S: ?Sized + $src::EngineeringCrs> $dst::EngineeringCrs for Wrapper<S> {
            fn engineering_datum(&self) -> Arc<dyn $dst::EngineeringDatum> {
                $dst(&self.backing().engineering_datum())
            }
        }

        impl<S: ?Sized + $src::ImageCrs> $dst::ImageCrs for Wrapper<S> {
            fn image_datum(&self) -> Arc<dyn $dst::ImageDatum> {
                $dst(&self.backing().image_datum())
            }
        }

        impl<S: ?Sized + $src::CompoundCrs> $dst::CompoundCrs for Wrapper<S> {
            fn components(&self) -> Vec<Arc<dyn $dst::CoordinateReferenceSystem>> {
                lift_vec(&self.backing().components(), $dst)
            }
        }

        impl<S: ?Sized + $src::ProjectedCrs> $dst::ProjectedCrs for Wrapper<S> {
            fn base_geographic_crs(&self) -> Arc<dyn $dst::GeographicCrs> {
                $dst(&self.backing().base_geographic_crs())
            }

            fn cartesian_cs(&self) -> Arc<dyn $dst::CartesianCs> {
                $dst(&self.backing().cartesian_cs())
            }
        }

        // ====================================================================
        // Specialized derived wrappers
        // ====================================================================

        impl $dst::GeodeticCrs for Wrapper<dyn $src::DerivedCrs, DerivedGeodetic> {
            fn geodetic_datum(&self) -> Arc<dyn $dst::GeodeticDatum> {
                let geodetic = narrow(DERIVED, "geodetic", Arc::clone(self.backing()), |crs| {
                    crs.as_geodetic()
                });
                $dst(&geodetic.geodetic_datum())
            }
        }

        impl $dst::GeodeticCrs for Wrapper<dyn $src::DerivedCrs, DerivedGeographic> {
            fn geodetic_datum(&self) -> Arc<dyn $dst::GeodeticDatum> {
                let geographic = narrow(DERIVED, "geographic", Arc::clone(self.backing()), |crs| {
                    crs.as_geographic()
                });
                $dst(&geographic.geodetic_datum())
            }
        }

        impl $dst::GeographicCrs for Wrapper<dyn $src::DerivedCrs, DerivedGeographic> {
            fn ellipsoidal_cs(&self) -> Arc<dyn $dst::EllipsoidalCs> {
                let geographic = narrow(DERIVED, "geographic", Arc::clone(self.backing()), |crs| {
                    crs.as_geographic()
                });
                $dst(&geographic.ellipsoidal_cs())
            }
        }

        impl $dst::VerticalCrs for Wrapper<dyn $src::DerivedCrs, DerivedVertical> {
            fn vertical_datum(&self) -> Arc<dyn $dst::VerticalDatum> {
                let vertical = narrow(DERIVED, "vertical", Arc::clone(self.backing()), |crs| {
                    crs.as_vertical()
                });
                $dst(&vertical.vertical_datum())
            }

            fn vertical_cs(&self) -> Arc<dyn $dst::VerticalCs> {
                let vertical = narrow(DERIVED, "vertical", Arc::clone(self.backing()), |crs| {
                    crs.as_vertical()
                });
                $dst(&vertical.vertical_cs())
            }
        }

        impl $dst::TemporalCrs for Wrapper<dyn $src::DerivedCrs, DerivedTemporal> {
            fn temporal_datum(&self) -> Arc<dyn $dst::TemporalDatum> {
                let temporal = narrow(DERIVED, "temporal", Arc::clone(self.backing()), |crs| {
                    crs.as_temporal()
                });
                $dst(&temporal.temporal_datum())
            }

            fn time_cs(&self) -> Arc<dyn $dst::TimeCs> {
                let temporal = narrow(DERIVED, "temporal", Arc::clone(self.backing()), |crs| {
                    crs.as_temporal()
                });
                $dst(&temporal.time_cs())
            }
        }

        impl $dst::EngineeringCrs for Wrapper<dyn $src::DerivedCrs, DerivedEngineering> {
            fn engineering_datum(&self) -> Arc<dyn $dst::EngineeringDatum> {
                let engineering = narrow(DERIVED, "engineering", Arc::clone(self.backing()), |crs| {
                    crs.as_engineering()
                });
                $dst(&engineering.engineering_datum())
            }
        }

        /// Second-axis selection for derived CRSs, least to most specific.
        pub static DERIVED_CRS: SubtypeTable<dyn $src::DerivedCrs, dyn $dst::DerivedCrs> =
            SubtypeTable {
                subtypes: &[
                    subtype!(dyn $src::DerivedCrs => dyn $dst::DerivedCrs, "derived geodetic", |crs| {
                        Arc::clone(crs).as_geodetic().map(|_| {
                            Arc::new(Wrapper::<dyn $src::DerivedCrs, DerivedGeodetic>::new(Arc::clone(crs)))
                        })
                    }),
                    subtype!(dyn $src::DerivedCrs => dyn $dst::DerivedCrs, "derived geographic", |crs| {
                        Arc::clone(crs).as_geographic().map(|_| {
                            Arc::new(Wrapper::<dyn $src::DerivedCrs, DerivedGeographic>::new(Arc::clone(crs)))
                        })
                    }),
                    subtype!(dyn $src::DerivedCrs => dyn $dst::DerivedCrs, "derived vertical", |crs| {
                        Arc::clone(crs).as_vertical().map(|_| {
                            Arc::new(Wrapper::<dyn $src::DerivedCrs, DerivedVertical>::new(Arc::clone(crs)))
                        })
                    }),
                    subtype!(dyn $src::DerivedCrs => dyn $dst::DerivedCrs, "derived temporal", |crs| {
                        Arc::clone(crs).as_temporal().map(|_| {
                            Arc::new(Wrapper::<dyn $src::DerivedCrs, DerivedTemporal>::new(Arc::clone(crs)))
                        })
                    }),
                    subtype!(dyn $src::DerivedCrs => dyn $dst::DerivedCrs, "derived engineering", |crs| {
                        Arc::clone(crs).as_engineering().map(|_| {
                            Arc::new(Wrapper::<dyn $src::DerivedCrs, DerivedEngineering>::new(Arc::clone(crs)))
                        })
                    }),
                ],
                generic: plain_wrapper!(dyn $src::DerivedCrs => dyn $dst::DerivedCrs),
            };

        // ====================================================================
        // Dispatch and facade
        // ====================================================================

        pub static CRS: Dispatch<
            dyn $src::CoordinateReferenceSystem,
            dyn $dst::CoordinateReferenceSystem,
        > = Dispatch {
            family: "coordinate reference system",
            unwrap: unwrap_wrappers!(
                dyn $dst::CoordinateReferenceSystem:
                Wrapper<dyn $dst::CoordinateReferenceSystem>,
                Wrapper<dyn $dst::SingleCrs>,
                Wrapper<dyn $dst::GeodeticCrs>,
                Wrapper<dyn $dst::GeocentricCrs>,
                Wrapper<dyn $dst::GeographicCrs>,
                Wrapper<dyn $dst::VerticalCrs>,
                Wrapper<dyn $dst::TemporalCrs>,
                Wrapper<dyn $dst::EngineeringCrs>,
                Wrapper<dyn $dst::ImageCrs>,
                Wrapper<dyn $dst::CompoundCrs>,
                Wrapper<dyn $dst::DerivedCrs>,
                Wrapper<dyn $dst::DerivedCrs, DerivedGeodetic>,
                Wrapper<dyn $dst::DerivedCrs, DerivedGeographic>,
                Wrapper<dyn $dst::DerivedCrs, DerivedVertical>,
                Wrapper<dyn $dst::DerivedCrs, DerivedTemporal>,
                Wrapper<dyn $dst::DerivedCrs, DerivedEngineering>,
                Wrapper<dyn $dst::ProjectedCrs>,
            ),
            table: SubtypeTable {
                subtypes: &[
                    subtype!(dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem,
                        "single", |crs| Arc::clone(crs).as_single().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem,
                        "geodetic", |crs| Arc::clone(crs).as_geodetic().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem,
                        "geocentric", |crs| Arc::clone(crs).as_geocentric().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem,
                        "geographic", |crs| Arc::clone(crs).as_geographic().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem,
                        "vertical", |crs| Arc::clone(crs).as_vertical().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem,
                        "temporal", |crs| Arc::clone(crs).as_temporal().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem,
                        "engineering", |crs| Arc::clone(crs).as_engineering().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem,
                        "image", |crs| Arc::clone(crs).as_image().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem,
                        "compound", |crs| Arc::clone(crs).as_compound().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem,
                        "derived", |crs| {
                            let derived = Arc::clone(crs).as_derived()?;
                            let (kind, wrapper) = DERIVED_CRS.select(&derived);
                            tracing::trace!(kind, "derived coordinate reference system");
                            Some(wrapper)
                        }),
                    subtype!(dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem,
                        "projected", |crs| Arc::clone(crs).as_projected().map(Wrapper::wrap)),
                ],
                generic: plain_wrapper!(
                    dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem
                ),
            },
        };

        facade!($facade: dyn $src::CoordinateReferenceSystem => dyn $dst::CoordinateReferenceSystem, CRS);
        facade!($facade: dyn $src::SingleCrs => dyn $dst::SingleCrs,
            via dyn $src::CoordinateReferenceSystem, CRS, as_single);
        facade!($facade: dyn $src::GeodeticCrs => dyn $dst::GeodeticCrs,
            via dyn $src::CoordinateReferenceSystem, CRS, as_geodetic);
        facade!($facade: dyn $src::GeocentricCrs => dyn $dst::GeocentricCrs,
            via dyn $src::CoordinateReferenceSystem, CRS, as_geocentric);
        facade!($facade: dyn $src::GeographicCrs => dyn $dst::GeographicCrs,
            via dyn $src::CoordinateReferenceSystem, CRS, as_geographic);
        facade!($facade: dyn $src::VerticalCrs => dyn $dst::VerticalCrs,
            via dyn $src::CoordinateReferenceSystem, CRS, as_vertical);
        facade!($facade: dyn $src::TemporalCrs => dyn $dst::TemporalCrs,
            via dyn $src::CoordinateReferenceSystem, CRS, as_temporal);
        facade!($facade: dyn $src::EngineeringCrs => dyn $dst::EngineeringCrs,
            via dyn $src::CoordinateReferenceSystem, CRS, as_engineering);
        facade!($facade: dyn $src::ImageCrs => dyn $dst::ImageCrs,
            via dyn $src::CoordinateReferenceSystem, CRS, as_image);
        facade!($facade: dyn $src::CompoundCrs => dyn $dst::CompoundCrs,
            via dyn $src::CoordinateReferenceSystem, CRS, as_compound);
        facade!($facade: dyn $src::DerivedCrs => dyn $dst::DerivedCrs,
            via dyn $src::CoordinateReferenceSystem, CRS, as_derived);
        facade!($facade: dyn $src::ProjectedCrs => dyn $dst::ProjectedCrs,
            via dyn $src::CoordinateReferenceSystem, CRS, as_projected);
    };
}
