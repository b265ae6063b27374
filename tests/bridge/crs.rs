//! Subtype selection across the CRS family.

use std::sync::Arc;

use geoapi_bridge::bridge::{DerivedGeographic, Wrapper, to_geoapi};
use geoapi_bridge::{geoapi, opengis};

use crate::helpers::opengis_fixtures::{CompoundCrs, Meta, bare_wgs84, rotated_pole, wgs84};

#[test]
fn test_geographic_crs_gets_geographic_wrapper() {
    let crs: Arc<dyn opengis::CoordinateReferenceSystem> = wgs84();
    let resolution = to_geoapi::crs::CRS.resolution(&crs);
    assert_eq!(resolution.subtype(), Some("geographic"));

    let adapted = resolution.into_target();
    assert!(Arc::clone(&adapted).as_geographic().is_some());
    assert!(Arc::clone(&adapted).as_geodetic().is_some());
    assert!(adapted.as_derived().is_none());
}

#[test]
fn test_geographic_axis_count() {
    let crs: Arc<dyn opengis::GeographicCrs> = wgs84();
    let adapted = geoapi(&crs);

    let cs = adapted.ellipsoidal_cs();
    assert_eq!(cs.dimension(), 2);
    let axis = cs.axis(0).expect("latitude axis");
    assert_eq!(axis.abbreviation(), "Lat");
    assert_eq!(axis.direction(), geoapi::AxisDirection::North);
    assert!(cs.axis(2).is_none());
}

#[test]
fn test_nested_objects_are_adapted() {
    let crs: Arc<dyn opengis::GeographicCrs> = wgs84();
    let datum = geoapi(&crs).geodetic_datum();
    assert_eq!(datum.name().code(), "World Geodetic System 1984");
    assert_eq!(datum.ellipsoid().semi_major_axis(), 6_378_137.0);
    assert_eq!(datum.prime_meridian().greenwich_longitude(), 0.0);
}

#[test]
fn test_aliases_become_generic_names() {
    let crs: Arc<dyn opengis::CoordinateReferenceSystem> = wgs84();
    let aliases = geoapi(&crs).alias();
    assert_eq!(
        aliases,
        vec![
            geoapi::GenericName::new(Some("EPSG".to_string()), "WGS84"),
            geoapi::GenericName::local("GPS"),
        ]
    );
}

#[test]
fn test_derived_geographic_gets_specialized_wrapper() {
    let crs: Arc<dyn opengis::CoordinateReferenceSystem> = rotated_pole();
    let resolution = to_geoapi::crs::CRS.resolution(&crs);
    assert_eq!(resolution.subtype(), Some("derived"));

    let adapted = resolution.into_target();
    let derived = Arc::clone(&adapted).as_derived().expect("derived facet");
    assert_eq!(derived.base_crs().name().code(), "WGS 84");
    assert_eq!(derived.conversion_from_base().method().name().code(), "Pole rotation");

    let geographic = adapted.as_geographic().expect("geographic facet");
    assert_eq!(geographic.ellipsoidal_cs().dimension(), 2);
}

#[test]
fn test_derived_kind_selection() {
    let derived: Arc<dyn opengis::DerivedCrs> = rotated_pole();
    let (kind, adapted) = to_geoapi::crs::DERIVED_CRS.select(&derived);
    assert_eq!(kind, "derived geographic");

    let specialized = adapted
        .as_any()
        .downcast_ref::<Wrapper<dyn opengis::DerivedCrs, DerivedGeographic>>()
        .expect("specialized wrapper");
    assert!(Arc::ptr_eq(specialized.backing(), &derived));
    let datum = geoapi::GeodeticCrs::geodetic_datum(specialized);
    assert_eq!(datum.name().code(), "World Geodetic System 1984");
    let cs = geoapi::GeographicCrs::ellipsoidal_cs(specialized);
    assert_eq!(cs.axis(1).expect("longitude axis").abbreviation(), "Lon");
}

#[test]
fn test_compound_components_keep_order() {
    let pole: Arc<dyn opengis::CoordinateReferenceSystem> = rotated_pole();
    let base: Arc<dyn opengis::CoordinateReferenceSystem> = wgs84();
    let compound: Arc<dyn opengis::CoordinateReferenceSystem> = Arc::new(CompoundCrs {
        meta: Meta::named("WGS 84 + pole"),
        components: vec![pole, base],
    });
    let adapted = geoapi(&compound).as_compound().expect("compound facet");
    let names: Vec<String> = adapted
        .components()
        .iter()
        .map(|component| component.name().code())
        .collect();
    assert_eq!(names, vec!["Rotated pole", "WGS 84"]);
}

#[test]
fn test_geographic_crs_without_facets_gets_plain_wrapper() {
    let crs: Arc<dyn opengis::GeographicCrs> = bare_wgs84();
    let adapted = geoapi(&crs);

    assert!(
        adapted
            .as_any()
            .downcast_ref::<Wrapper<dyn opengis::GeographicCrs>>()
            .is_some()
    );
    assert_eq!(adapted.name().code(), "WGS 84 (bare)");
    assert_eq!(adapted.ellipsoidal_cs().dimension(), 2);
    assert!(Arc::ptr_eq(&crs, &opengis(&adapted)));
}

#[test]
fn test_crs_without_facets_resolves_to_generic_root() {
    let crs: Arc<dyn opengis::CoordinateReferenceSystem> = bare_wgs84();
    let resolution = to_geoapi::crs::CRS.resolution(&crs);
    assert_eq!(resolution.subtype(), Some(geoapi_bridge::bridge::GENERIC));
    assert!(resolution.into_target().as_geographic().is_none());
}
